//! Spawns backend requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;

use crate::core::backend::{BackendClient, ChatRequest};

use super::PendingReply;

/// Send `request` on the shared runtime. The result arrives on `PendingReply::result_rx`.
pub fn spawn_request(
    rt: &Arc<Runtime>,
    client: BackendClient,
    request: ChatRequest,
) -> PendingReply {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(client.send(&request));
        let _ = result_tx.send(result);
    });

    PendingReply { result_rx }
}
