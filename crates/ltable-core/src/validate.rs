use crate::config::{ShowConfig, Strategy};
use crate::error::{LtError, Result};

pub fn validate_config(c: &ShowConfig) -> Result<()> {
    if c.player_count == 0 {
        return Err(LtError::InvalidInput("player_count must be >= 1".into()));
    }
    let frames = c.frames();
    if frames == 0 {
        return Err(LtError::InvalidInput("frame_count must be >= 1".into()));
    }

    match c.strategy {
        Strategy::Sparse => {
            if c.time_range == 0 {
                return Err(LtError::InvalidInput("time_range must be >= 1".into()));
            }
            // Rejection sampling never finishes once every slot is taken.
            if frames > c.time_range as usize {
                return Err(LtError::InvalidInput(format!(
                    "frame_count ({}) exceeds time_range ({})",
                    frames, c.time_range
                )));
            }
        }
        Strategy::Gradient | Strategy::Pattern => {
            // Interpolation divides by frame_count - 1.
            if c.strategy == Strategy::Gradient && frames < 2 {
                return Err(LtError::InvalidInput(
                    "gradient needs frame_count >= 2 (start and end frame)".into(),
                ));
            }
            if c.step_ticks == 0 {
                return Err(LtError::InvalidInput("step_ticks must be >= 1".into()));
            }
            let last = (frames as u64 - 1).saturating_mul(c.step_ticks as u64);
            if last > u32::MAX as u64 {
                return Err(LtError::InvalidInput(format!(
                    "last timestamp {last} does not fit in u32"
                )));
            }
        }
    }

    c.parts.validate()?;

    if c.chunk_size == 0 {
        return Err(LtError::InvalidInput("chunk_size must be >= 1".into()));
    }

    Ok(())
}
