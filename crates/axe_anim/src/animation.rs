//! Sprite-sheet frame animation
//!
//! An [`Animation`] steps through a list of [`Frame`]s, moving a clip
//! rectangle across a sheet. Sheets can be described in RON with
//! [`AnimationSheet`] and built into animations at load time.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;

use axe_math::{MatchType, Rect, Vec2};

use crate::AnimError;

bitflags! {
    /// Mirroring applied when a frame is drawn
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flip: u8 {
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
    }
}

impl Default for Flip {
    fn default() -> Self {
        Flip::empty()
    }
}

fn default_scale() -> f32 {
    1.0
}

/// One cell of an animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Cell position on the sheet, in clip-sized units
    pub position: Vec2,
    /// Seconds this frame is shown
    pub duration: f32,
    /// Game-defined flags (hit frames, sound cues, ...)
    #[serde(default)]
    pub flags: u64,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub flip: Flip,
}

impl Frame {
    pub fn new(position: Vec2, duration: f32, flags: u64) -> Self {
        Self {
            position,
            duration,
            flags,
            rotation: 0.0,
            scale: 1.0,
            flip: Flip::empty(),
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    /// True if every bit of `input` is set on this frame
    pub fn has_flags(&self, input: u64) -> bool {
        self.has_flags_matching(input, MatchType::All)
    }

    pub fn has_flags_matching(&self, input: u64, match_type: MatchType) -> bool {
        match_type.is_match(self.flags, input)
    }
}

/// Parallel per-frame columns for [`Animation::from_arrays`]
///
/// The optional columns, when present, must have the same length as the
/// required ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameArrays<'a> {
    pub positions: &'a [Vec2],
    pub durations: &'a [f32],
    pub flags: &'a [u64],
    pub rotations: Option<&'a [f32]>,
    pub scales: Option<&'a [f32]>,
    pub flips: Option<&'a [Flip]>,
}

impl FrameArrays<'_> {
    fn check_lengths(&self) -> Result<usize, AnimError> {
        let mut lengths = vec![self.positions.len(), self.durations.len(), self.flags.len()];
        lengths.extend(self.rotations.map(|c| c.len()));
        lengths.extend(self.scales.map(|c| c.len()));
        lengths.extend(self.flips.map(|c| c.len()));

        for (i, pair) in lengths.windows(2).enumerate() {
            if pair[0] != pair[1] {
                return Err(AnimError::LengthMismatch {
                    index: i + 1,
                    expected: pair[0],
                    found: pair[1],
                });
            }
        }
        Ok(lengths[0])
    }

    fn frames(&self) -> Result<Vec<Frame>, AnimError> {
        let count = self.check_lengths()?;
        let frames = (0..count)
            .map(|j| Frame {
                position: self.positions[j],
                duration: self.durations[j],
                flags: self.flags[j],
                rotation: self.rotations.map_or(0.0, |c| c[j]),
                scale: self.scales.map_or(1.0, |c| c[j]),
                flip: self.flips.map_or(Flip::empty(), |c| c[j]),
            })
            .collect();
        Ok(frames)
    }
}

/// A playing sequence of frames
#[derive(Clone, Debug)]
pub struct Animation {
    /// Source rectangle of the current frame
    pub clip: Rect,
    pub origin: Vec2,
    /// Number of plays before completion; 0 repeats forever
    pub repeat_count: u32,
    frames: Vec<Frame>,
    complete: bool,
    counter: usize,
    repeat_counter: u32,
    frame_time: f32,
    animation_time: f32,
    duration: f32,
    flags: u64,
}

impl Animation {
    pub fn new(clip: Rect, origin: Vec2, frames: Vec<Frame>, repeat_count: u32) -> Self {
        let mut animation = Self {
            clip,
            origin,
            repeat_count,
            frames,
            complete: false,
            counter: 0,
            repeat_counter: 0,
            frame_time: 0.0,
            animation_time: 0.0,
            duration: 0.0,
            flags: 0,
        };
        animation.update_flags_and_duration();
        animation
    }

    /// Build frames from parallel columns
    pub fn from_arrays(
        clip: Rect,
        origin: Vec2,
        columns: FrameArrays<'_>,
        repeat_count: u32,
    ) -> Result<Self, AnimError> {
        Ok(Self::new(clip, origin, columns.frames()?, repeat_count))
    }

    fn update_flags_and_duration(&mut self) {
        self.duration = self.frames.iter().map(|f| f.duration).sum();
        self.flags = self.frames.iter().fold(0, |acc, f| acc | f.flags);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame being shown, or `None` for an empty animation
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.counter)
    }

    pub fn frame_index(&self) -> usize {
        self.counter
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Time since the start of the current play
    pub fn animation_time(&self) -> f32 {
        self.animation_time
    }

    /// Total of all frame durations
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Union of all frame flags
    pub fn flags(&self) -> u64 {
        self.flags
    }

    pub fn has_flags(&self, input: u64) -> bool {
        self.has_flags_matching(input, MatchType::All)
    }

    pub fn has_flags_matching(&self, input: u64, match_type: MatchType) -> bool {
        match_type.is_match(self.flags, input)
    }

    pub fn reset(&mut self) {
        self.complete = false;
        self.frame_time = 0.0;
        self.animation_time = 0.0;
        self.counter = 0;
    }

    /// Jump straight to the next frame
    pub fn skip(&mut self) {
        let Some(duration) = self.current_frame().map(|f| f.duration) else {
            return;
        };
        self.animation_time += duration - self.frame_time;
        self.frame_time = 0.0;
        self.next_frame();
    }

    pub fn update(&mut self, dt: f32) {
        let Some(current) = self.current_frame().copied() else {
            return;
        };

        self.frame_time += dt;
        self.animation_time += dt;

        if self.frame_time > current.duration {
            self.frame_time -= current.duration;
            self.next_frame();
        }
    }

    fn next_frame(&mut self) {
        self.counter += 1;

        if self.counter >= self.frames.len() {
            self.counter = 0;
            self.animation_time = 0.0;

            if self.repeat_count != 0 {
                self.repeat_counter += 1;
                if self.repeat_counter >= self.repeat_count {
                    self.complete = true;
                }
            }
        }

        if let Some(frame) = self.frames.get(self.counter) {
            self.clip.x = (self.clip.width as f32 * frame.position.x) as i32;
            self.clip.y = (self.clip.height as f32 * frame.position.y) as i32;
        }
    }
}

/// Serializable description of an animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSheet {
    pub clip: Rect,
    #[serde(default)]
    pub origin: Vec2,
    #[serde(default)]
    pub repeat_count: u32,
    pub frames: Vec<Frame>,
}

impl AnimationSheet {
    pub fn new(clip: Rect) -> Self {
        Self {
            clip,
            origin: Vec2::ZERO,
            repeat_count: 0,
            frames: Vec::new(),
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Load a sheet from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnimError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let sheet = Self::from_ron(&contents)?;
        log::debug!(
            "Loaded animation sheet {} ({} frames)",
            path.as_ref().display(),
            sheet.frames.len()
        );
        Ok(sheet)
    }

    /// Save a sheet to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AnimError> {
        let contents = self.to_ron()?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn from_ron(contents: &str) -> Result<Self, AnimError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn to_ron(&self) -> Result<String, AnimError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Create a fresh animation from this sheet
    pub fn build(&self) -> Animation {
        Animation::new(self.clip, self.origin, self.frames.clone(), self.repeat_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_cycle(repeat_count: u32) -> Animation {
        let frames = vec![
            Frame::new(Vec2::new(0.0, 0.0), 0.1, 0b01),
            Frame::new(Vec2::new(1.0, 0.0), 0.1, 0b10),
            Frame::new(Vec2::new(2.0, 1.0), 0.2, 0),
        ];
        Animation::new(Rect::new(0, 0, 16, 32), Vec2::ZERO, frames, repeat_count)
    }

    #[test]
    fn test_duration_and_flags_from_frames() {
        let anim = walk_cycle(0);
        assert!((anim.duration() - 0.4).abs() < 0.0001);
        assert_eq!(anim.flags(), 0b11);
        assert!(anim.has_flags(0b11));
        assert!(!anim.has_flags(0b100));
        assert!(anim.has_flags_matching(0b110, MatchType::AnyOf));
    }

    #[test]
    fn test_update_advances_and_moves_clip() {
        let mut anim = walk_cycle(0);
        anim.update(0.05);
        assert_eq!(anim.frame_index(), 0);
        anim.update(0.06);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.clip.x, 16);
        assert_eq!(anim.clip.y, 0);
        assert!((anim.frame_time() - 0.01).abs() < 0.0001);
    }

    #[test]
    fn test_wrap_resets_animation_time() {
        let mut anim = walk_cycle(0);
        anim.skip();
        anim.skip();
        assert_eq!(anim.frame_index(), 2);
        assert_eq!(anim.clip.x, 32);
        assert_eq!(anim.clip.y, 32);
        anim.skip();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.animation_time(), 0.0);
        assert!(!anim.is_complete());
    }

    #[test]
    fn test_repeat_count_completes() {
        let mut anim = walk_cycle(2);
        for _ in 0..3 {
            anim.skip();
        }
        assert!(!anim.is_complete());
        for _ in 0..3 {
            anim.skip();
        }
        assert!(anim.is_complete());

        anim.reset();
        assert!(!anim.is_complete());
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn test_empty_animation_never_advances() {
        let mut anim = Animation::new(Rect::new(0, 0, 8, 8), Vec2::ZERO, Vec::new(), 0);
        anim.update(1.0);
        anim.skip();
        assert_eq!(anim.frame_index(), 0);
        assert!(anim.current_frame().is_none());
        assert_eq!(anim.duration(), 0.0);
    }

    #[test]
    fn test_from_arrays_checks_lengths() {
        let positions = [Vec2::ZERO, Vec2::X];
        let durations = [0.1, 0.1];
        let flags = [0, 0];
        let rotations = [0.5];

        let columns = FrameArrays {
            positions: &positions,
            durations: &durations,
            flags: &flags,
            rotations: Some(&rotations),
            ..Default::default()
        };
        let result = Animation::from_arrays(Rect::new(0, 0, 8, 8), Vec2::ZERO, columns, 0);
        assert!(matches!(
            result,
            Err(AnimError::LengthMismatch { index: 3, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_from_arrays_builds_frames() {
        let positions = [Vec2::ZERO, Vec2::X];
        let durations = [0.1, 0.3];
        let flags = [1, 4];
        let flips = [Flip::empty(), Flip::HORIZONTAL];

        let columns = FrameArrays {
            positions: &positions,
            durations: &durations,
            flags: &flags,
            flips: Some(&flips),
            ..Default::default()
        };
        let anim = Animation::from_arrays(Rect::new(0, 0, 8, 8), Vec2::ZERO, columns, 1).unwrap();
        assert_eq!(anim.frame_count(), 2);
        assert_eq!(anim.flags(), 5);
        assert_eq!(anim.frames()[1].flip, Flip::HORIZONTAL);
        assert_eq!(anim.frames()[1].scale, 1.0);
    }

    #[test]
    fn test_frame_flags() {
        let frame = Frame::new(Vec2::ZERO, 0.1, 0b101);
        assert!(frame.has_flags(0b100));
        assert!(!frame.has_flags(0b110));
        assert!(frame.has_flags_matching(0b110, MatchType::AnyOf));
    }

    #[test]
    fn test_sheet_ron_roundtrip() {
        let sheet = AnimationSheet::new(Rect::new(0, 0, 16, 16))
            .with_frame(Frame::new(Vec2::ZERO, 0.1, 1))
            .with_frame(Frame::new(Vec2::X, 0.2, 0).with_flip(Flip::VERTICAL))
            .with_repeat_count(3);

        let ron_str = sheet.to_ron().unwrap();
        let parsed = AnimationSheet::from_ron(&ron_str).unwrap();
        assert_eq!(parsed, sheet);

        let anim = parsed.build();
        assert_eq!(anim.frame_count(), 2);
        assert_eq!(anim.repeat_count, 3);
    }

    #[test]
    fn test_sheet_defaults_optional_fields() {
        let ron_str = r#"(
            clip: (x: 0, y: 0, width: 8, height: 8),
            frames: [
                (position: (x: 1.0, y: 0.0), duration: 0.25),
            ],
        )"#;
        let sheet = AnimationSheet::from_ron(ron_str).unwrap();
        assert_eq!(sheet.repeat_count, 0);
        assert_eq!(sheet.frames[0].scale, 1.0);
        assert_eq!(sheet.frames[0].flip, Flip::empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = AnimationSheet::load("/nonexistent/walk.ron");
        assert!(matches!(result, Err(AnimError::Io(_))));
    }
}
