use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::trajectory::Trajectory;

pub const ITERATION_COUNT_KEY: &str = "IterationCount";
pub const POINT_COUNT_KEY: &str = "PointCount";

fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

// Writes the trajectory in the point file format read by `load_trajectory`.
pub fn write_trajectory<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serialize_trajectory(&mut writer, trajectory)?;
    writer.flush()?;

    log::info!(
        "Saved {} snapshots ({} points) to {}",
        trajectory.len(),
        trajectory.total_points(),
        path.display()
    );
    Ok(())
}

// f64 Display is the shortest representation that parses back to the same value.
pub fn serialize_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> std::io::Result<()> {
    writeln!(writer, "{}={}", ITERATION_COUNT_KEY, trajectory.len())?;
    for snapshot in trajectory {
        writeln!(writer, "{}={}", POINT_COUNT_KEY, snapshot.len())?;
        for (x, y, z) in snapshot.points() {
            writeln!(writer, "{};{};{}", x, y, z)?;
        }
    }
    Ok(())
}
