use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::source::Source;
use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

/// A looping background playback. Audio keeps playing for as long as this
/// value is alive; dropping it stops the stream.
pub struct BackgroundLoop {
    _stream: OutputStream,
    _sink: Sink,
}

/// Start looping playback of the given audio file on the default output
/// device. Playback runs on the audio stack's own thread and has no
/// synchronization point with the caller.
pub fn play_looping(path: &Path) -> Result<BackgroundLoop> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
    let source = Decoder::new(BufReader::new(file))
        .with_context(|| format!("Failed to decode audio file: {}", path.display()))?
        .repeat_infinite();

    let (stream, handle) =
        OutputStream::try_default().context("Failed to open audio output device")?;
    let sink = Sink::try_new(&handle).context("Failed to create audio sink")?;
    sink.append(source);
    debug!(path = %path.display(), "background audio loop started");

    Ok(BackgroundLoop {
        _stream: stream,
        _sink: sink,
    })
}
