//! Sharing one wrapped function between threads.

use argcheck_validator::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[test]
fn shared_wrapper_matches_serial_results() {
    let invoked = AtomicUsize::new(0);
    let wrapped = wrap(
        |args: Arguments| {
            invoked.fetch_add(1, Ordering::Relaxed);
            args.positional()[0].as_i64()
        },
        signature!(square(n)).unwrap(),
        ParameterSchemaSet::new().with(
            "n",
            Schema::new()
                .of_type(ValueKind::Integer)
                .option(0..50)
                .unwrap(),
        ),
    )
    .unwrap();

    let serial: Vec<bool> = (0..100)
        .map(|n| wrapped.call(Arguments::new().arg(n)).is_ok())
        .collect();
    invoked.store(0, Ordering::Relaxed);

    let parallel: Vec<Vec<bool>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..100)
                        .map(|n| wrapped.call(Arguments::new().arg(n)).is_ok())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    for results in &parallel {
        assert_eq!(results, &serial);
    }
    assert_eq!(invoked.load(Ordering::Relaxed), 4 * 50);
}

#[test]
fn wrapper_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let wrapped = wrap(
        |_: Arguments| (),
        signature!(f(a)).unwrap(),
        ParameterSchemaSet::new().with("a", Schema::new().predicate(positive())),
    )
    .unwrap();
    assert_send_sync(&wrapped);
}
