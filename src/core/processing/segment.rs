//! 1-D segmentation of a column profile into sprite spans, with
//! deterministic reconciliation against an expected frame count.

/// A half-open interval `[start, end)` of columns believed to contain one
/// sprite. Spans are always produced in increasing, non-overlapping order;
/// that order is the canonical frame order for every downstream stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Locate candidate sprite spans in a content profile.
///
/// Maximal runs of `true` columns are collected, runs narrower than
/// `min_span_width` are discarded as noise, and adjacent spans separated
/// by gaps narrower than `min_gap` are merged. Returns `None` when the
/// profile carries no content at all, so callers can fall back to even
/// division instead of silently receiving an empty list.
pub fn segment(profile: &[bool], min_gap: u32, min_span_width: Option<u32>) -> Option<Vec<Span>> {
    let mut runs = content_runs(profile);
    if let Some(min_width) = min_span_width {
        runs.retain(|span| span.width() >= min_width);
    }
    let merged = merge_close(runs, min_gap);
    if merged.is_empty() { None } else { Some(merged) }
}

/// Maximal runs of contiguous `true` columns.
fn content_runs(profile: &[bool]) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut open: Option<u32> = None;
    for (x, &has_content) in profile.iter().enumerate() {
        match (has_content, open) {
            (true, None) => open = Some(x as u32),
            (false, Some(start)) => {
                runs.push(Span::new(start, x as u32));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push(Span::new(start, profile.len() as u32));
    }
    runs
}

/// Merge adjacent spans whose gap is narrower than `min_gap`. A single
/// left-to-right fold reaches the fixpoint because merging only ever
/// extends a span to the right.
fn merge_close(spans: Vec<Span>, min_gap: u32) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(prev) if span.start - prev.end < min_gap => prev.end = span.end,
            _ => merged.push(span),
        }
    }
    merged
}

/// Force the span count to exactly `expected_count`.
///
/// Over target: the adjacent pair with the smallest gap merges first,
/// lowest start index winning ties. Under target: the widest span splits
/// at its integer midpoint, lowest start index winning ties. Both loops
/// are deterministic and the whole function is a no-op once the count
/// already matches. `spans` must be non-empty when `expected_count > 0`.
pub fn reconcile(mut spans: Vec<Span>, expected_count: usize) -> Vec<Span> {
    let expected_count = expected_count.max(1);
    while spans.len() > expected_count {
        let i = narrowest_gap(&spans);
        spans[i].end = spans[i + 1].end;
        spans.remove(i + 1);
    }
    while spans.len() < expected_count {
        let i = widest_span(&spans);
        let Span { start, end } = spans[i];
        let mid = start + (end - start) / 2;
        spans[i] = Span::new(start, mid);
        spans.insert(i + 1, Span::new(mid, end));
    }
    spans
}

fn narrowest_gap(spans: &[Span]) -> usize {
    let mut best = 0;
    let mut best_gap = u32::MAX;
    for i in 0..spans.len() - 1 {
        let gap = spans[i + 1].start - spans[i].end;
        if gap < best_gap {
            best_gap = gap;
            best = i;
        }
    }
    best
}

fn widest_span(spans: &[Span]) -> usize {
    let mut best = 0;
    let mut best_width = 0;
    for (i, span) in spans.iter().enumerate() {
        if span.width() > best_width {
            best_width = span.width();
            best = i;
        }
    }
    best
}

/// Evenly divide the full image width into `count` spans. This is the
/// fallback when the profile carries no content: not a true sprite match,
/// but it guarantees well-formed output dimensions.
pub fn even_spans(width: u32, count: usize) -> Vec<Span> {
    let count = count.max(1) as u64;
    (0..count)
        .map(|i| {
            let start = (i * u64::from(width) / count) as u32;
            let end = ((i + 1) * u64::from(width) / count) as u32;
            Span::new(start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_from(spans: &[(u32, u32)], width: u32) -> Vec<bool> {
        let mut profile = vec![false; width as usize];
        for &(start, end) in spans {
            for x in start..end {
                profile[x as usize] = true;
            }
        }
        profile
    }

    fn assert_ordered_disjoint(spans: &[Span]) {
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {:?}", pair);
            assert!(pair[0].start < pair[1].start, "order broken in {:?}", pair);
        }
    }

    #[test]
    fn detects_maximal_runs() {
        let profile = profile_from(&[(2, 10), (20, 25), (30, 40)], 40);
        let spans = segment(&profile, 0, None).unwrap();
        assert_eq!(
            spans,
            vec![Span::new(2, 10), Span::new(20, 25), Span::new(30, 40)]
        );
    }

    #[test]
    fn run_reaching_the_right_edge_is_closed() {
        let profile = profile_from(&[(35, 40)], 40);
        let spans = segment(&profile, 0, None).unwrap();
        assert_eq!(spans, vec![Span::new(35, 40)]);
    }

    #[test]
    fn narrow_runs_are_noise() {
        let profile = profile_from(&[(0, 3), (10, 30)], 40);
        let spans = segment(&profile, 0, Some(5)).unwrap();
        assert_eq!(spans, vec![Span::new(10, 30)]);
    }

    #[test]
    fn close_spans_merge() {
        let profile = profile_from(&[(0, 10), (13, 20), (30, 35)], 40);
        let spans = segment(&profile, 5, None).unwrap();
        assert_eq!(spans, vec![Span::new(0, 20), Span::new(30, 35)]);
    }

    #[test]
    fn empty_profile_signals_no_content() {
        assert_eq!(segment(&vec![false; 64], 5, None), None);
        // A width filter that eats every run is the same situation
        let profile = profile_from(&[(0, 2)], 64);
        assert_eq!(segment(&profile, 5, Some(10)), None);
    }

    #[test]
    fn reconcile_is_identity_at_target_count() {
        let spans = vec![Span::new(0, 10), Span::new(20, 30)];
        assert_eq!(reconcile(spans.clone(), 2), spans);
        // And stays stable when applied twice after an adjustment
        let adjusted = reconcile(vec![Span::new(0, 30)], 2);
        assert_eq!(reconcile(adjusted.clone(), 2), adjusted);
    }

    #[test]
    fn merges_down_smallest_gap_first() {
        // Gaps: 10, 2, 10 -> the middle pair merges first
        let spans = vec![
            Span::new(0, 10),
            Span::new(20, 30),
            Span::new(32, 40),
            Span::new(50, 60),
        ];
        let out = reconcile(spans, 3);
        assert_eq!(
            out,
            vec![Span::new(0, 10), Span::new(20, 40), Span::new(50, 60)]
        );
    }

    #[test]
    fn splits_up_widest_first() {
        // Widths: 10, 30 -> the second span splits at its midpoint
        let spans = vec![Span::new(0, 10), Span::new(20, 50)];
        let out = reconcile(spans, 3);
        assert_eq!(
            out,
            vec![Span::new(0, 10), Span::new(20, 35), Span::new(35, 50)]
        );
    }

    #[test]
    fn three_runs_split_to_six() {
        // The 40-wide span splits first, then the widest-then-leftmost
        // rule walks the remaining 20-wide spans from the left.
        let spans = vec![Span::new(0, 20), Span::new(30, 70), Span::new(80, 100)];
        let out = reconcile(spans, 6);
        assert_eq!(out.len(), 6);
        assert_ordered_disjoint(&out);
        assert_eq!(
            out,
            vec![
                Span::new(0, 10),
                Span::new(10, 20),
                Span::new(30, 40),
                Span::new(40, 50),
                Span::new(50, 70),
                Span::new(80, 100),
            ]
        );
    }

    #[test]
    fn nine_equal_runs_merge_to_four_from_the_left() {
        // All gaps equal: ties resolve to the lowest start index, so the
        // merge front advances from the left.
        let spans: Vec<Span> = (0..9).map(|i| Span::new(i * 10, i * 10 + 5)).collect();
        let out = reconcile(spans, 4);
        assert_eq!(out.len(), 4);
        assert_ordered_disjoint(&out);
        assert_eq!(
            out,
            vec![
                Span::new(0, 55),
                Span::new(60, 65),
                Span::new(70, 75),
                Span::new(80, 85),
            ]
        );
    }

    #[test]
    fn count_invariant_holds_across_targets() {
        let profile = profile_from(&[(0, 12), (20, 26), (40, 64)], 64);
        let runs = segment(&profile, 3, None).unwrap();
        for expected in 1..=10usize {
            let out = reconcile(runs.clone(), expected);
            assert_eq!(out.len(), expected, "target {}", expected);
            assert_ordered_disjoint(&out);
        }
    }

    #[test]
    fn even_division_of_256_by_4() {
        let spans = even_spans(256, 4);
        assert_eq!(
            spans,
            vec![
                Span::new(0, 64),
                Span::new(64, 128),
                Span::new(128, 192),
                Span::new(192, 256),
            ]
        );
    }

    #[test]
    fn even_division_distributes_remainders() {
        let spans = even_spans(10, 3);
        assert_eq!(spans.iter().map(Span::width).sum::<u32>(), 10);
        assert_ordered_disjoint(&spans);
        assert_eq!(spans.last().unwrap().end, 10);
    }
}
