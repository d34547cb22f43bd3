use tokio::sync::Mutex;

use common::{HeartRateSample, ImuSample, RotationSample};

/// Samples taken out of the live buffers in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    pub heart_rates: Vec<HeartRateSample>,
    pub rotations: Vec<RotationSample>,
    pub imu: Vec<ImuSample>,
}

/// Number of samples currently buffered per channel group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferLengths {
    pub heart_rates: usize,
    pub motion: usize,
}

// Rotation and IMU samples share a lock so the two vectors grow together.
#[derive(Debug, Default)]
struct MotionBuffer {
    rotations: Vec<RotationSample>,
    imu: Vec<ImuSample>,
}

/// Live per-session buffers appended to by the sampler.
#[derive(Debug, Default)]
pub struct SessionBuffers {
    heart_rates: Mutex<Vec<HeartRateSample>>,
    motion: Mutex<MotionBuffer>,
}

impl SessionBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_heart_rate(&self, sample: HeartRateSample) {
        self.heart_rates.lock().await.push(sample);
    }

    pub async fn push_motion(&self, rotation: RotationSample, imu: ImuSample) {
        let mut motion = self.motion.lock().await;
        motion.rotations.push(rotation);
        motion.imu.push(imu);
    }

    pub async fn lengths(&self) -> BufferLengths {
        let heart_rates = self.heart_rates.lock().await.len();
        let motion = self.motion.lock().await.imu.len();
        BufferLengths {
            heart_rates,
            motion,
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.lengths().await == BufferLengths::default()
    }

    /// Moves every buffered sample out and leaves the buffers empty.
    ///
    /// Both locks are held together, so no append can land between reading
    /// one channel group and the other.
    pub async fn clone_and_clear(&self) -> SampleSet {
        let mut heart_rates = self.heart_rates.lock().await;
        let mut motion = self.motion.lock().await;
        SampleSet {
            heart_rates: std::mem::take(&mut *heart_rates),
            rotations: std::mem::take(&mut motion.rotations),
            imu: std::mem::take(&mut motion.imu),
        }
    }
}
