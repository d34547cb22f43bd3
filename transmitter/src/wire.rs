//! Wire format of the collector's `/end` payload.

use common::SessionSnapshot;

use crate::errors::TransmitError;

/// Validates the snapshot and encodes it as a UTF-8 JSON body.
///
/// Returns a Serialization error for a snapshot that breaks the sampler's
/// invariants or that JSON cannot represent.
pub fn encode_session(snapshot: &SessionSnapshot) -> Result<Vec<u8>, TransmitError> {
    snapshot.validate()?;
    Ok(serde_json::to_vec(snapshot)?)
}

/// Parses a `/end` body back into a snapshot.
pub fn decode_session(body: &[u8]) -> Result<SessionSnapshot, TransmitError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{HeartRateSample, ImuSample, RotationSample, XYZ};
    use serde_json::{json, Value};

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot::new(
            vec![HeartRateSample::new(10_000, 72), HeartRateSample::new(20_000, 75)],
            vec![RotationSample::new(0.0, 0.5, 0.25, 1.0); 2],
            vec![
                ImuSample::from_readings(50, XYZ::new([0.0, 0.0, 9.75]), XYZ::default()),
                ImuSample::from_readings(100, XYZ::new([0.5, 0.0, 9.75]), XYZ::new([0.0, 0.125, 0.0])),
            ],
            21,
            0.1,
            20,
        )
    }

    #[test]
    fn test_encode_session_payload() {
        let body = encode_session(&snapshot()).unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "heart_rates": [{"t": 10000, "bpm": 72}, {"t": 20000, "bpm": 75}],
                "rotation_vectors": [
                    {"x": 0.0, "y": 0.5, "z": 0.25, "w": 1.0},
                    {"x": 0.0, "y": 0.5, "z": 0.25, "w": 1.0}
                ],
                "imu": [
                    {"t": 50, "ax": 0.0, "ay": 0.0, "az": 9.75, "gx": 0.0, "gy": 0.0, "gz": 0.0},
                    {"t": 100, "ax": 0.5, "ay": 0.0, "az": 9.75, "gx": 0.0, "gy": 0.125, "gz": 0.0}
                ],
                "duration": 21,
                "heart_rate_hz": 0.1,
                "imu_hz": 20
            })
        );
    }

    #[test]
    fn test_encode_empty_session() {
        let snapshot = SessionSnapshot::new(vec![], vec![], vec![], 0, 0.1, 20);
        let value: Value = serde_json::from_slice(&encode_session(&snapshot).unwrap()).unwrap();
        assert_eq!(value["heart_rates"], json!([]));
        assert_eq!(value["rotation_vectors"], json!([]));
        assert_eq!(value["imu"], json!([]));
        assert_eq!(value["duration"], json!(0));
    }

    #[test]
    fn test_decode_matches_encoded_snapshot() {
        let snapshot = snapshot();
        let decoded = decode_session(&encode_session(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_encode_rejects_non_finite_sample() {
        let mut snapshot = snapshot();
        snapshot.imu[1].gx = f32::INFINITY;
        let result = encode_session(&snapshot);
        assert!(matches!(result, Err(TransmitError::Serialization(_))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_session(b"{\"heart_rates\": 3}");
        assert!(matches!(result, Err(TransmitError::Serialization(_))));
    }
}
