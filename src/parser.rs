//! OpenPose JSON parsing and keypoint files

use crate::ordering::list_dir;
use anyhow::{bail, Context, Result};
use pose_core::{Frame, PoseSequence, JOINT_COUNT};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One OpenPose `--write_json` output file.
#[derive(Debug, Deserialize)]
struct OpenPoseFrame {
    #[serde(default)]
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    #[serde(alias = "pose_keypoints_2d")]
    pose_keypoints: Vec<f64>,
}

/// Parse one OpenPose frame. Only the first detected person is used; a
/// frame without anyone in it becomes a frame of undetected joints.
pub fn parse_openpose_frame(json: &str) -> Result<Frame> {
    let parsed: OpenPoseFrame = serde_json::from_str(json).context("Malformed OpenPose JSON")?;

    let Some(person) = parsed.people.first() else {
        return Ok([[0.0; 3]; JOINT_COUNT]);
    };

    let values = &person.pose_keypoints;
    if values.len() != JOINT_COUNT * 3 {
        bail!(
            "expected {} keypoint values (COCO model), found {}",
            JOINT_COUNT * 3,
            values.len()
        );
    }

    let mut frame = [[0.0; 3]; JOINT_COUNT];
    for (row, triple) in frame.iter_mut().zip(values.chunks_exact(3)) {
        row.copy_from_slice(triple);
    }
    Ok(frame)
}

/// Parse every `*.json` frame in a folder, in file name order.
pub fn parse_sequence<P: AsRef<Path>>(json_folder: P) -> Result<Vec<Frame>> {
    let folder = json_folder.as_ref();
    let mut files: Vec<PathBuf> = list_dir(folder)?
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read frame: {:?}", path))?;
        let frame = parse_openpose_frame(&content)
            .with_context(|| format!("Failed to parse frame: {:?}", path))?;
        if frame.iter().all(|row| row[2] == 0.0) {
            warn!(file = ?path, "no person detected in frame");
        }
        frames.push(frame);
    }

    info!(folder = ?folder, frames = frames.len(), "parsed OpenPose frames");
    Ok(frames)
}

/// Write a keypoint tensor as JSON.
pub fn save_keypoints<P: AsRef<Path>>(path: P, frames: &[Frame]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(frames).context("Failed to serialize keypoints")?;
    fs::write(path, json).with_context(|| format!("Failed to write keypoints: {:?}", path))
}

pub fn load_keypoints<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypoints: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid keypoint file: {:?}", path))
}

/// Load a keypoint file as a normalized pose sequence.
pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<PoseSequence> {
    let path = path.as_ref();
    let frames = load_keypoints(path)?;
    PoseSequence::from_frames(&frames)
        .with_context(|| format!("Cannot build pose sequence from {:?}", path))
}

/// Convert every per-video OpenPose folder in `input_folder` into a keypoint
/// file named after the folder. Returns the files written.
pub fn convert_folders<P: AsRef<Path>, Q: AsRef<Path>>(
    input_folder: P,
    output_folder: Q,
) -> Result<Vec<PathBuf>> {
    let input = input_folder.as_ref();
    let output = output_folder.as_ref();
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output folder: {:?}", output))?;

    let mut videos: Vec<PathBuf> = list_dir(input)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();
    videos.sort();

    let mut written = Vec::with_capacity(videos.len());
    for video in videos {
        let Some(name) = video.file_name() else {
            continue;
        };
        let frames = parse_sequence(&video)?;
        let target = output.join(name).with_extension("json");
        save_keypoints(&target, &frames)?;
        written.push(target);
    }
    Ok(written)
}
