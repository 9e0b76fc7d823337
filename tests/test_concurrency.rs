use leveled_logger::{LevelLogger, Logger, Severity};
use leveled_logger::{log_debug, log_error};
use regex::Regex;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;

const THREADS: usize = 16;
const CALLS: usize = 250;

/// Concurrent callers never see their message under another call's tag
#[test]
fn test_concurrent_lines_keep_their_tags() {
    let buf = SharedBuf::default();
    let logger: Arc<dyn Logger> =
        Arc::new(LevelLogger::with_writer(Severity::Debug, "stress", buf.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS {
                    if rand::random::<bool>() {
                        log_debug!(logger; "debug", t, i);
                    } else {
                        log_error!(logger, "error {} {}", t, i);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let line = Regex::new(
        r"^stress (DEBUG|ERROR): \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} (debug|error) (\d+) (\d+)$",
    )
    .unwrap();

    let out = buf.contents();
    let mut count = 0;
    for l in out.lines() {
        let caps = line
            .captures(l)
            .unwrap_or_else(|| panic!("interleaved or malformed line: {:?}", l));
        assert_eq!(caps[1].to_lowercase(), &caps[2], "tag mismatch in {:?}", l);
        count += 1;
    }
    assert_eq!(count, THREADS * CALLS);
}

/// Sink shared between a logger and the test
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
