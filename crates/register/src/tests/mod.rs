//! Behavioral tests run against both register backings.

use std::sync::Arc;

use parking_lot::Mutex;
use signal_chain::Handler;


type Log = Arc<Mutex<Vec<&'static str>>>;

/// Handler that appends `tag` to a shared log when fired.
fn logging(tag: &'static str, log: &Log) -> Handler<()> {
	let log = Arc::clone(log);
	Handler::closure(move |_: &()| log.lock().push(tag))
}
