//! Flexbox alignment from flag props

use crate::style::{Alignment, Alignments, FlexDirection};
use modish_core::Props;

const ROW_MAIN_AXIS: &[&str] = &["left", "right", "centerH", "spread"];
const ROW_CROSS_AXIS: &[&str] = &["top", "bottom", "centerV"];
const COLUMN_MAIN_AXIS: &[&str] = &["top", "bottom", "centerV", "spread"];
const COLUMN_CROSS_AXIS: &[&str] = &["left", "right", "centerH"];

fn flag(props: &Props, name: &str) -> bool {
    props.get(name).is_some_and(|value| value.is_truthy())
}

fn alignment_for(flag: &str) -> Alignment {
    match flag {
        "left" | "top" => Alignment::FlexStart,
        "right" | "bottom" => Alignment::FlexEnd,
        "spread" => Alignment::SpaceBetween,
        _ => Alignment::Center,
    }
}

/// Last set flag of `flags` wins
fn axis(props: &Props, flags: &[&str]) -> Option<Alignment> {
    flags
        .iter()
        .rev()
        .find(|name| flag(props, name))
        .map(|name| alignment_for(name))
}

/// Alignment for a whole prop set.
///
/// `row` makes the horizontal flags drive `justifyContent`; without it the
/// vertical flags do. `center` centers both axes over any directional flag.
pub fn extract_alignments(props: &Props) -> Alignments {
    let row = flag(props, "row");
    let (main, cross) = if row {
        (ROW_MAIN_AXIS, ROW_CROSS_AXIS)
    } else {
        (COLUMN_MAIN_AXIS, COLUMN_CROSS_AXIS)
    };

    let mut alignments = Alignments {
        flex_direction: row.then_some(FlexDirection::Row),
        justify_content: axis(props, main),
        align_items: axis(props, cross),
    };

    if flag(props, "center") {
        alignments.justify_content = Some(Alignment::Center);
        alignments.align_items = Some(Alignment::Center);
    }

    alignments
}
