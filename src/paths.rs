/// Number of curves per background layer.
pub const PATH_COUNT: usize = 36;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingPath {
    pub id: usize,
    /// SVG path data.
    pub d: String,
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    /// Seconds per replay of the draw animation.
    pub duration: f64,
}

/// Builds the curves of one hero background layer. `position` is `1` or `-1`
/// and mirrors the horizontal drift of the layer.
///
/// Durations come from the index instead of a random source so the server
/// markup matches what the client hydrates.
pub fn floating_paths(position: i32) -> Vec<FloatingPath> {
    let position = i64::from(position);
    (0..PATH_COUNT)
        .map(|id| {
            let i = id as i64;
            let shift = i * 5 * position;
            let rise = i * 6;
            let d = format!(
                "M-{} -{}C-{} -{} -{} {} {} {}C{} {} {} {} {} {}",
                380 - shift,
                189 + rise,
                380 - shift,
                189 + rise,
                312 - shift,
                216 - rise,
                152 - shift,
                343 - rise,
                616 - shift,
                470 - rise,
                684 - shift,
                875 - rise,
                684 - shift,
                875 - rise,
            );
            let step = id as f64;
            FloatingPath {
                id,
                d,
                color: format!("rgba(139, 92, 246, {:.2})", 0.1 + step * 0.02),
                width: f64::max(1.5 + step * 0.05, 0.8 + step * 0.03),
                opacity: 0.3 + step * 0.02,
                duration: 20.0 + ((id * 37 + (position + 1) as usize * 11) % 100) as f64 / 10.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_count() {
        assert_eq!(floating_paths(1).len(), PATH_COUNT);
        assert_eq!(floating_paths(-1).len(), PATH_COUNT);
    }

    #[test]
    fn test_path_grammar() {
        let paths = floating_paths(1);
        assert_eq!(
            paths[0].d,
            "M-380 -189C-380 -189 -312 216 152 343C616 470 684 875 684 875"
        );
        assert_eq!(
            paths[1].d,
            "M-375 -195C-375 -195 -307 210 147 337C611 464 679 869 679 869"
        );

        let mirrored = floating_paths(-1);
        assert_eq!(
            mirrored[1].d,
            "M-385 -195C-385 -195 -317 210 157 337C621 464 689 869 689 869"
        );
    }

    #[test]
    fn test_styling_ramps() {
        let paths = floating_paths(1);
        assert!((paths[0].width - 1.5).abs() < f64::EPSILON);
        assert!((paths[0].opacity - 0.3).abs() < 1e-9);
        assert_eq!(paths[0].color, "rgba(139, 92, 246, 0.10)");
        assert_eq!(paths[35].color, "rgba(139, 92, 246, 0.80)");
        assert!(paths.windows(2).all(|w| w[0].opacity < w[1].opacity));
        assert!(paths.windows(2).all(|w| w[0].width < w[1].width));
    }

    #[test]
    fn test_durations_are_stable() {
        let first = floating_paths(1);
        assert_eq!(first, floating_paths(1));
        assert!(first
            .iter()
            .chain(floating_paths(-1).iter())
            .all(|p| (20.0..30.0).contains(&p.duration)));
    }
}
