use aqi_dash::layout::{self, Anchor, LayoutBounds, MIN_LABEL_GAP, RIGHT_PAD};

fn anchor(id: usize, y: f64, text: &str) -> Anchor {
    Anchor {
        id,
        x: 700.0,
        y,
        text: text.to_string(),
    }
}

fn bounds() -> LayoutBounds {
    LayoutBounds {
        top: 28.0,
        bottom: 420.0,
        right_edge: 944.0,
    }
}

#[test]
fn disjoint_labels_keep_natural_positions() {
    let anchors = vec![
        anchor(0, 60.0, "North"),
        anchor(1, 200.0, "Central"),
        anchor(2, 340.0, "South"),
    ];
    let placed = layout::layout(&anchors, bounds(), MIN_LABEL_GAP);
    assert_eq!(placed[0].y, 60.0);
    assert_eq!(placed[1].y, 200.0);
    assert_eq!(placed[2].y, 340.0);
}

#[test]
fn min_gap_holds_for_converging_lines() {
    // Four lines terminating within a 15px span.
    let anchors: Vec<Anchor> = (0..4)
        .map(|i| anchor(i, 200.0 + i as f64 * 5.0, "station"))
        .collect();
    let placed = layout::layout(&anchors, bounds(), MIN_LABEL_GAP);
    for pair in placed.windows(2) {
        let gap = pair[1].y - pair[0].y;
        assert!(
            gap >= MIN_LABEL_GAP - 1e-9,
            "gap {gap} below floor between {} and {}",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn ordering_matches_natural_y_order() {
    let anchors = vec![
        anchor(0, 310.0, "low line"),
        anchor(1, 50.0, "high line"),
        anchor(2, 180.0, "middle line"),
    ];
    let placed = layout::layout(&anchors, bounds(), MIN_LABEL_GAP);
    assert_eq!(
        placed.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 0],
        "vertical label order must match line endpoint order"
    );
    for pair in placed.windows(2) {
        assert!(pair[0].y < pair[1].y);
    }
}

#[test]
fn bottom_overflow_redistributes_upward() {
    // Cluster near the bottom bound; forward sweep alone would overflow.
    let anchors: Vec<Anchor> = (0..5)
        .map(|i| anchor(i, 400.0 + i as f64, "station"))
        .collect();
    let placed = layout::layout(&anchors, bounds(), MIN_LABEL_GAP);
    let b = bounds();
    for p in &placed {
        assert!(p.y >= b.top && p.y <= b.bottom);
    }
    for pair in placed.windows(2) {
        assert!(pair[1].y - pair[0].y >= MIN_LABEL_GAP - 1e-9);
    }
    assert_eq!(placed.last().map(|p| p.y), Some(b.bottom));
}

#[test]
fn labels_never_cross_the_right_edge() {
    let b = bounds();
    let texts = ["A", "Scotten & W Jefferson", "An unusually verbose station name"];
    for text in texts {
        let placed = layout::layout(&[anchor(0, 100.0, text)], b, MIN_LABEL_GAP);
        let p = &placed[0];
        assert!(
            p.x + p.width <= b.right_edge - RIGHT_PAD + 1e-9,
            "pill for {text:?} crosses the right edge"
        );
    }
}

#[test]
fn wide_label_shifts_left_of_its_anchor_offset() {
    let b = bounds();
    let near_edge = Anchor {
        id: 0,
        x: b.right_edge - 40.0,
        y: 100.0,
        text: "Schoolcraft / Dossin".to_string(),
    };
    let placed = layout::layout(&[near_edge.clone()], b, MIN_LABEL_GAP);
    assert!(placed[0].x < near_edge.x, "pill must back off from the edge");
}

#[test]
fn over_dense_stack_degrades_inside_bounds() {
    // More labels than min_gap spacing can fit between the bounds. The
    // clamp keeps every label inside even though gaps collapse.
    let b = LayoutBounds {
        top: 10.0,
        bottom: 100.0,
        right_edge: 944.0,
    };
    let anchors: Vec<Anchor> = (0..8).map(|i| anchor(i, 50.0 + i as f64, "s")).collect();
    let placed = layout::layout(&anchors, b, MIN_LABEL_GAP);
    assert_eq!(placed.len(), 8);
    for p in &placed {
        assert!(p.y >= b.top && p.y <= b.bottom);
    }
}

#[test]
fn empty_input_yields_empty_layout() {
    assert!(layout::layout(&[], bounds(), MIN_LABEL_GAP).is_empty());
}
