use crate::test_utils::{assert_close, fixed, measure_root, offsets};
use crate::{Block, Frame, Justification, Layout};

fn stack_of(heights: &[f32]) -> Frame {
    let mut frame = Frame::stack();
    for height in heights {
        frame.write(fixed(30.0, *height));
    }
    frame
}

#[test]
fn stops_when_height_runs_out() {
    let mut frame = stack_of(&[10.0, 10.0, 10.0]);
    let layout = Layout::new(100.0, 25.0).with_height_tight(false);

    let placement = measure_root(&mut frame, &layout).unwrap();

    assert_eq!(placement.children().len(), 2);
    assert_close(placement.height(), 20.0);
    assert!(!frame.is_fill_complete());
    assert_eq!(frame.pipe().peek(), Some(2));
}

#[test]
fn continues_where_previous_fill_stopped() {
    let mut frame = stack_of(&[10.0, 10.0, 10.0]);
    let layout = Layout::new(100.0, 25.0);

    measure_root(&mut frame, &layout).unwrap();
    let rest = measure_root(&mut frame, &layout).unwrap();

    assert_eq!(rest.children().len(), 1);
    assert_eq!(rest.children()[0].slot(), Some(2));
    assert!(frame.is_fill_complete());
}

#[test]
fn oversized_first_child_is_kept() {
    let mut frame = stack_of(&[50.0, 10.0]);
    let placement = measure_root(&mut frame, &Layout::new(100.0, 25.0)).unwrap();

    assert_eq!(placement.children().len(), 1);
    assert_close(placement.height(), 50.0);
    assert!(!frame.is_fill_complete());
}

#[test]
fn unsplittable_stack_takes_everything() {
    let mut frame = stack_of(&[10.0, 10.0, 10.0]);
    let layout = Layout::new(100.0, 25.0).with_splitting(false);

    let placement = measure_root(&mut frame, &layout).unwrap();

    assert_eq!(placement.children().len(), 3);
    assert_close(placement.height(), 30.0);
    assert!(frame.is_fill_complete());
}

#[test]
fn children_heights_add_up_to_frame_height() {
    let mut frame = stack_of(&[3.5, 7.25, 12.0, 1.0]);
    let placement = measure_root(&mut frame, &Layout::new(100.0, 500.0)).unwrap();

    let total: f32 = placement.children().iter().map(|c| c.height()).sum();
    assert_close(placement.height(), total);
    let tops: Vec<f32> = offsets(&placement).iter().map(|(_, y)| *y).collect();
    assert_eq!(tops, vec![0.0, 3.5, 10.75, 22.75]);
}

#[test]
fn justification_positions_children_horizontally() {
    let cases = [
        (Justification::Left, 0.0),
        (Justification::Full, 0.0),
        (Justification::Right, 70.0),
        (Justification::Centre, 35.0),
    ];
    for (justification, expected) in cases {
        let mut frame = stack_of(&[10.0]);
        let layout = Layout::new(100.0, 50.0).with_justification(justification);
        let placement = measure_root(&mut frame, &layout).unwrap();
        assert_close(offsets(&placement)[0].0, expected);
        assert_close(placement.width(), 100.0);
    }
}

#[test]
fn tight_width_shrinks_to_widest_child() {
    let mut frame = Frame::stack();
    frame.write(fixed(20.0, 5.0));
    frame.write(fixed(45.0, 5.0));
    let layout = Layout::new(100.0, 50.0)
        .with_width_tight(true)
        .with_justification(Justification::Right);

    let placement = measure_root(&mut frame, &layout).unwrap();

    assert_close(placement.width(), 45.0);
    assert_eq!(offsets(&placement), vec![(25.0, 0.0), (0.0, 5.0)]);
}

#[test]
fn layout_override_narrows_the_frame() {
    let mut frame = stack_of(&[10.0, 10.0, 10.0]).with_layout(|l| l.with_max_height(15.0));
    let placement = measure_root(&mut frame, &Layout::new(100.0, 100.0)).unwrap();
    assert_eq!(placement.children().len(), 1);
}
