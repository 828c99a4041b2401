//! Dots Demo: A dot wandering around a 3x3 frame.
//!
//! Each frame is redrawn in place; only the changed cells are written.
//! Set `RUST_LOG=ansiwriter=trace` to see per-frame statistics on stderr.

use ansiwriter::FrameWriter;
use crossterm::{cursor, execute};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const FRAMES: [&str; 6] = [
    "   \n   \n   ",
    "   \n   \n . ",
    "   \n . \n   ",
    " . \n   \n   ",
    "   \n   \n   ",
    " * \n   \n   ",
];

const FRAME_DELAY: Duration = Duration::from_millis(330);

fn main() -> ansiwriter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ansiwriter::WriterConfig::new(3, 3).with_line_separator("\n");
    let mut writer = FrameWriter::with_config(config, std::io::stdout())?;

    execute!(writer.get_mut(), cursor::Hide)?;
    let result = FRAMES.iter().try_for_each(|frame| {
        writer.write_frame(*frame)?;
        std::thread::sleep(FRAME_DELAY);
        Ok::<_, ansiwriter::Error>(())
    });
    execute!(writer.get_mut(), cursor::Show)?;

    result
}
