use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::source::PathSource;
use crate::track::{build_track, Track, TrackOptions};
use crate::track_writer::{write_track, TrackFormat};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Samples `source`, builds the track and writes it to `config.destination`.
pub fn export<S: PathSource>(source: &S, config: &ExportConfig) -> Result<Track, ExportError> {
    let track = build_source_track(source, config.sample_time, &config.track_options())?;
    write_track_file(&track, &config.track_format(), &config.destination)?;
    info!(
        "exported {} waypoints to {}",
        track.num_waypoints(),
        config.destination.display()
    );
    Ok(track)
}

pub fn build_source_track<S: PathSource>(source: &S, time: f64, options: &TrackOptions) -> Result<Track, ExportError> {
    let samples = source.sample(time)?;
    debug!("sampled {} control points at {}", samples.len(), time);
    build_track(source.canvas(), &samples, options)
}

/// Temporary sibling of the destination that is deleted unless committed.
struct PendingFile {
    path: PathBuf,
    committed: bool,
}

impl PendingFile {
    fn new(destination: &Path) -> PendingFile {
        let mut name = destination.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        PendingFile {
            path: destination.with_file_name(name),
            committed: false,
        }
    }

    fn commit(mut self, destination: &Path) -> io::Result<()> {
        fs::rename(&self.path, destination)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Replaces `destination` with the serialized track.
///
/// Readers see either the old file or the complete new one, never a partial write.
pub fn write_track_file(track: &Track, format: &TrackFormat, destination: &Path) -> Result<(), ExportError> {
    let pending = PendingFile::new(destination);
    {
        let file = File::create(&pending.path)?;
        let mut out = BufWriter::new(file);
        write_track(track, format, &mut out)?;
        let file = out.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }
    pending.commit(destination)?;
    Ok(())
}
