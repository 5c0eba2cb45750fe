//! Background polling of a [`SensorDevice`]

use super::{OrientationSource, SampleCell, SensorDevice, SensorError, SensorSample};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Owns the polling thread of an orientation sensor
///
/// Each cycle attempts one read: a successful read overwrites the shared
/// sample, a failed one leaves the previous sample in place. The thread
/// checks the running flag once per cycle, so it exits within one poll
/// interval of [`FusionReader::stop`].
pub struct FusionReader {
    latest: Arc<SampleCell>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
    device_name: String,
}

impl FusionReader {
    /// Initialise the device and start polling it
    ///
    /// # Errors
    /// Returns the device's init error; no thread is started in that case.
    pub fn start<D: SensorDevice>(mut device: D) -> Result<Self, SensorError> {
        device.init()?;
        let device_name = device.name().to_string();
        let interval = device.poll_interval();
        log::info!("Sensor {} initialised, polling every {:?}", device_name, interval);

        let latest = Arc::new(SampleCell::new());
        let running = Arc::new(AtomicBool::new(true));

        let thread_latest = Arc::clone(&latest);
        let thread_running = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("imu-reader".to_string())
            .spawn(move || {
                let mut reads = 0u64;
                while thread_running.load(Ordering::Acquire) {
                    if device.read() {
                        thread_latest.store(device.fusion_pose());
                        reads += 1;
                    }
                    thread::sleep(interval);
                }
                reads
            })?;

        Ok(Self {
            latest,
            running,
            handle: Some(handle),
            device_name,
        })
    }

    /// Whether the polling thread is still meant to run
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl OrientationSource for FusionReader {
    fn latest(&self) -> SensorSample {
        self.latest.load()
    }

    fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        self.running.store(false, Ordering::Release);
        match handle.join() {
            Ok(reads) => log::info!("Sensor {} stopped after {} reads", self.device_name, reads),
            Err(_) => log::error!("Sensor {} reader thread panicked", self.device_name),
        }
        true
    }
}

impl Drop for FusionReader {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    struct ScriptedImu {
        fail_init: bool,
        reads: Arc<AtomicUsize>,
        pose: SensorSample,
        succeed: bool,
    }

    impl ScriptedImu {
        fn new(reads: Arc<AtomicUsize>) -> Self {
            Self { fail_init: false, reads, pose: SensorSample::new(0.0, 0.25, 1.5), succeed: true }
        }
    }

    impl SensorDevice for ScriptedImu {
        fn name(&self) -> &str {
            "scripted"
        }

        fn init(&mut self) -> Result<(), SensorError> {
            if self.fail_init {
                Err(SensorError::InitFailed { device: "scripted".to_string(), reason: "no bus".to_string() })
            } else {
                Ok(())
            }
        }

        fn poll_interval(&self) -> Duration {
            Duration::from_millis(1)
        }

        fn read(&mut self) -> bool {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.succeed
        }

        fn fusion_pose(&self) -> SensorSample {
            self.pose
        }
    }

    fn wait_for_reads(reads: &AtomicUsize, at_least: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while reads.load(Ordering::SeqCst) < at_least && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_init_failure_is_fatal() {
        let mut device = ScriptedImu::new(Arc::new(AtomicUsize::new(0)));
        device.fail_init = true;
        assert!(matches!(FusionReader::start(device), Err(SensorError::InitFailed { .. })));
    }

    #[test]
    fn test_successful_reads_publish_pose() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut reader = FusionReader::start(ScriptedImu::new(Arc::clone(&reads))).unwrap();
        wait_for_reads(&reads, 3);
        assert_eq!(reader.latest(), SensorSample::new(0.0, 0.25, 1.5));
        assert!(reader.stop());
    }

    #[test]
    fn test_failed_reads_keep_initial_value() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut device = ScriptedImu::new(Arc::clone(&reads));
        device.succeed = false;
        let mut reader = FusionReader::start(device).unwrap();
        wait_for_reads(&reads, 3);
        assert_eq!(reader.latest(), SensorSample::default());
        reader.stop();
    }

    #[test]
    fn test_stop_halts_polling_and_is_idempotent() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut reader = FusionReader::start(ScriptedImu::new(Arc::clone(&reads))).unwrap();
        wait_for_reads(&reads, 1);

        assert!(reader.stop());
        assert!(!reader.is_running());
        let after_stop = reads.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(10));
        assert_eq!(reads.load(Ordering::SeqCst), after_stop);

        assert!(!reader.stop());
    }
}
