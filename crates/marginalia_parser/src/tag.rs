//! The directive tag table.
//!
//! A fixed, enumerable list of (recognition pattern → handler) pairs. Each
//! pattern recognizes one directive shape on a single line; its handler
//! receives the captured fields and mutates the annotation set being built.
//! The shapes are textually disjoint, so table order does not affect the
//! result.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use marginalia_foundation::types::{ConditionCall, Direction, MovementMode, SoundSpec};
use marginalia_foundation::AnnotationSet;

use crate::scope;

/// Handler invoked with a directive's captured fields.
type Apply = fn(&Captures<'_>, &mut AnnotationSet);

/// One directive shape and its effect on the annotation set.
pub struct TagPattern {
    pattern: Regex,
    apply: Apply,
}

/// The fixed table of directive shapes.
pub struct TagTable {
    patterns: Vec<TagPattern>,
}

/// Coordinate pairs inside an occupies payload: `(x,y)`.
static PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((-?\d+)[,\s]+(-?\d+)\)").unwrap());

/// Opening delimiter of a condition call: a non-whitespace run ending in `(`.
static CALL_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\S+\()").unwrap());

/// The table used by the free [`parse`] function, compiled once.
static TABLE: LazyLock<TagTable> = LazyLock::new(TagTable::new);

impl TagTable {
    /// Builds the directive table.
    #[must_use]
    pub fn new() -> Self {
        let table = [
            (r"(?i)^<Adjusted (X|Y):\s*(-?\d+)>", apply_draw_offset as Apply),
            (r"(?i)^<(\w+) Size:\s*(\d+)>", apply_size),
            (r"(?i)^<Occupies:\s*(.+)>", apply_occupies),
            (r"(?i)^<Conditions?:\s*(.+)>", apply_conditions),
            (r"(?i)^<(EventBlock|Event Block)>", apply_block),
            (r"(?i)^<Movement:\s*(Boat|Ship|Fly)>", apply_movement),
            (r"(?i)^<Sound:\s*(\w+),\s*(\d+),\s*(\d+)>", apply_sound),
        ];
        let patterns = table
            .into_iter()
            .map(|(pattern, apply)| TagPattern {
                pattern: Regex::new(pattern).unwrap(),
                apply,
            })
            .collect();
        Self { patterns }
    }

    /// Parses a text block into an annotation set.
    ///
    /// Each line is checked against every directive shape; the first match
    /// wins and later shapes are not tried for that line. Lines matching no
    /// shape are ignored without error.
    #[must_use]
    pub fn parse(&self, text: &str) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        for line in text.lines() {
            for tag in &self.patterns {
                if let Some(caps) = tag.pattern.captures(line) {
                    (tag.apply)(&caps, &mut set);
                    break;
                }
            }
        }
        set
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a text block into an annotation set using the shared table.
#[must_use]
pub fn parse(text: &str) -> AnnotationSet {
    TABLE.parse(text)
}

// =============================================================================
// Directive handlers
// =============================================================================

fn apply_draw_offset(caps: &Captures<'_>, set: &mut AnnotationSet) {
    let Ok(pixels) = caps[2].parse::<i32>() else {
        return;
    };
    match caps[1].to_ascii_lowercase().as_str() {
        "x" => set.draw_offset.0 = pixels,
        "y" => set.draw_offset.1 = pixels,
        _ => {}
    }
}

fn apply_size(caps: &Captures<'_>, set: &mut AnnotationSet) {
    // Unknown direction words fall out of the permissive parse.
    let Some(direction) = Direction::from_alias(&caps[1]) else {
        return;
    };
    let Ok(cells) = caps[2].parse::<u32>() else {
        return;
    };
    set.size_extension.set(direction, cells);
}

fn apply_occupies(caps: &Captures<'_>, set: &mut AnnotationSet) {
    for pair in PAIR.captures_iter(&caps[1]) {
        let (Ok(x), Ok(y)) = (pair[1].parse::<i32>(), pair[2].parse::<i32>()) else {
            continue;
        };
        set.occupied_offsets.push((x, y));
    }
}

fn apply_conditions(caps: &Captures<'_>, set: &mut AnnotationSet) {
    for call_scope in scope::scan(&caps[1], &CALL_OPEN, ")") {
        // An unclosed scope is a malformed call; skip it.
        if !call_scope.closed {
            continue;
        }
        if let Some(call) = extract_call(&call_scope.text) {
            set.condition_calls.push(call);
        }
    }
}

/// Extracts a condition call from a closed scope's text, `name(args)`.
///
/// The name is the text before the first `(`; the raw argument text is the
/// text between the first `(` and the last `)`, split on a comma followed by
/// optional whitespace. Only whitespace trailing a comma is consumed, so the
/// first argument keeps any leading whitespace it was authored with.
fn extract_call(text: &str) -> Option<ConditionCall> {
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    let name = &text[..open];
    if name.is_empty() || close <= open {
        return None;
    }
    let inner = &text[open + 1..close];
    let args = if inner.is_empty() {
        Vec::new()
    } else {
        let mut parts = inner.split(',');
        let mut args: Vec<String> = vec![parts.next().unwrap_or_default().to_string()];
        args.extend(parts.map(|arg| arg.trim_start().to_string()));
        args
    };
    Some(ConditionCall::new(name, args))
}

fn apply_block(_caps: &Captures<'_>, set: &mut AnnotationSet) {
    set.blocks_others = true;
}

fn apply_movement(caps: &Captures<'_>, set: &mut AnnotationSet) {
    if let Some(mode) = MovementMode::from_tag(&caps[1]) {
        set.movement_mode = mode;
    }
}

fn apply_sound(caps: &Captures<'_>, set: &mut AnnotationSet) {
    let (Ok(max_volume), Ok(max_distance)) = (caps[2].parse(), caps[3].parse()) else {
        return;
    };
    set.sound_spec = Some(SoundSpec {
        clip: caps[1].to_string(),
        max_volume,
        max_distance,
    });
}
