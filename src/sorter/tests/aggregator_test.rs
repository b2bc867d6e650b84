use crate::error::SortError;
use crate::sorter::tests::fixture::{down, ok, Fixture};
use crate::sorter::verdict::LabelSet;

fn frames(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|index| vec![index as u8]).collect()
}

#[test]
fn test_single_frame_with_label() {
    let f = Fixture::new(vec![ok("4")], vec![ok("deer")]);

    let verdict = f.aggregator().aggregate(&frames(1), "Michigan").unwrap();

    assert_eq!(verdict.max_quality, 4);
    assert_eq!(verdict.labels, ["deer"].into_iter().collect::<LabelSet>());
    assert!(!verdict.is_multi_frame);
}

#[test]
fn test_video_labels_are_deduplicated() {
    let f = Fixture::new(
        vec![ok("4"), ok("4"), ok("4")],
        vec![ok("deer"), ok("fox"), ok("deer")],
    );

    let verdict = f.aggregator().aggregate(&frames(3), "Michigan").unwrap();

    assert_eq!(verdict.labels.as_slice(), ["deer", "fox"]);
    assert!(verdict.is_multi_frame);
}

#[test]
fn test_low_quality_frames_are_not_classified() {
    // frame 1: 2,2,2 -> skipped; frame 2: 3 then 3,3 -> classified
    let f = Fixture::new(
        vec![ok("2"), ok("2"), ok("2"), ok("3"), ok("3"), ok("3")],
        vec![ok("turkey")],
    );

    let verdict = f.aggregator().aggregate(&frames(2), "Michigan").unwrap();

    assert_eq!(verdict.max_quality, 3);
    assert_eq!(verdict.labels.as_slice(), ["turkey"]);
    assert_eq!(f.vision_client.label_calls(), 1);
}

#[test]
fn test_every_frame_skipped_leaves_no_labels() {
    let f = Fixture::new(vec![ok("1"), ok("2"), ok("1")], vec![]);

    let verdict = f.aggregator().aggregate(&frames(1), "Michigan").unwrap();

    assert_eq!(verdict.max_quality, 1);
    assert!(verdict.labels.as_slice().is_empty());
    assert_eq!(f.vision_client.label_calls(), 0);
}

#[test]
fn test_sentinels_never_enter_the_label_set() {
    let none = || ok("none");
    let unknown = || ok("unknown");
    let f = Fixture::new(
        vec![ok("5"), ok("5")],
        vec![none(), none(), none(), none(), none(), unknown(), unknown(), unknown(), unknown(), unknown()],
    );

    let verdict = f.aggregator().aggregate(&frames(2), "Michigan").unwrap();

    assert!(verdict.labels.as_slice().is_empty());
    assert!(!verdict.labels.contains("none"));
    assert!(!verdict.labels.contains("unknown"));
}

#[test]
fn test_max_quality_is_the_maximum_over_frames() {
    let f = Fixture::new(
        vec![ok("5"), ok("3"), ok("3"), ok("3"), ok("4")],
        vec![ok("deer"), ok("deer"), ok("deer")],
    );

    let verdict = f.aggregator().aggregate(&frames(3), "Michigan").unwrap();

    assert_eq!(verdict.max_quality, 5);
}

#[test]
fn test_hard_error_aborts_the_file() {
    let f = Fixture::new(vec![ok("4"), down(), down(), down()], vec![ok("deer")]);

    let result = f.aggregator().aggregate(&frames(3), "Michigan");

    assert!(matches!(result, Err(SortError::Transport(_))));
    assert_eq!(f.vision_client.quality_calls(), 4);
}

#[test]
fn test_classification_error_aborts_the_file() {
    let f = Fixture::new(vec![ok("4"), ok("4")], vec![ok("deer"), down()]);

    let result = f.aggregator().aggregate(&frames(2), "Michigan");

    assert!(matches!(result, Err(SortError::Transport(_))));
}

#[test]
fn test_no_frames_is_rejected() {
    let f = Fixture::new(vec![], vec![]);

    let result = f.aggregator().aggregate(&[], "Michigan");

    assert!(matches!(result, Err(SortError::NoFrames)));
    assert_eq!(f.vision_client.quality_calls(), 0);
}
