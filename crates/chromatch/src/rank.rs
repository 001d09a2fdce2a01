use crate::core::{delta_e_2000, rank_by_distance};
use crate::opt::Options;
use crate::palette::{Palette, PaletteEntry};
use crate::{Float, Lab, Rgb};

/// A palette entry together with its CIEDE2000 difference from a query color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedMatch<'a> {
    entry: &'a PaletteEntry,
    delta: Float,
}

impl<'a> RankedMatch<'a> {
    /// Get the palette entry.
    pub fn entry(&self) -> &'a PaletteEntry {
        self.entry
    }

    /// Get the entry's name.
    pub fn name(&self) -> &'a str {
        self.entry.name()
    }

    /// Get the entry's hex code without `#`.
    pub fn hex(&self) -> &'a str {
        self.entry.hex()
    }

    /// Get the entry's hex code with `#`.
    pub fn css_hex(&self) -> String {
        self.entry.css_hex()
    }

    /// Get the CIEDE2000 difference, which is not rounded.
    pub fn delta(&self) -> Float {
        self.delta
    }
}

impl std::fmt::Display for RankedMatch<'_> {
    /// Format this match as `name #rrggbb ΔE = delta`.
    ///
    /// This method respects the formatter's precision for the difference.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} #{} ΔE = ", self.name(), self.hex()))?;
        if let Some(precision) = f.precision() {
            f.write_fmt(format_args!("{:.*}", precision, self.delta))
        } else {
            f.write_fmt(format_args!("{}", self.delta))
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Rank the palette's entries by their perceptual difference from the query.
///
/// The query must be six hexadecimal digits, optionally preceded by `#`.
/// Anything else, including surrounding white space, is treated as input
/// that is still being typed and results in **no** matches. Otherwise, this
/// function returns the `min(k, palette.len())` entries with the smallest
/// CIEDE2000 difference in ascending order. Entries with the same difference
/// retain their palette order.
///
/// ```
/// # use chromatch::{rank, tailwind};
/// let matches = rank("#3b82f6", tailwind::palette(), 3);
/// assert_eq!(matches.len(), 3);
/// assert_eq!(matches[0].name(), "blue-500");
/// assert_eq!(matches[0].delta(), 0.0);
///
/// assert!(rank("#3b82f", tailwind::palette(), 3).is_empty());
/// ```
pub fn rank<'p>(query: &str, palette: &'p Palette, k: usize) -> Vec<RankedMatch<'p>> {
    match query.parse::<Rgb>() {
        Ok(rgb) => rank_rgb(rgb, palette, k),
        Err(_) => Vec::new(),
    }
}

/// Rank the palette's entries by their perceptual difference from the 24-bit
/// color.
pub fn rank_rgb(rgb: Rgb, palette: &Palette, k: usize) -> Vec<RankedMatch<'_>> {
    rank_lab(&rgb.to_lab(), palette, k)
}

/// Rank the palette's entries by their perceptual difference from the Lab
/// color.
///
/// The Lab color is the reference and each entry is the sample when
/// computing CIEDE2000.
pub fn rank_lab<'p>(lab: &Lab, palette: &'p Palette, k: usize) -> Vec<RankedMatch<'p>> {
    rank_by_distance(
        lab.as_ref(),
        palette.iter().map(|entry| entry.lab().as_ref()),
        k,
        delta_e_2000,
    )
    .into_iter()
    .map(|(index, delta)| RankedMatch {
        entry: &palette[index],
        delta,
    })
    .collect()
}

// ====================================================================================================================

/// A ranker of palette entries.
///
/// A ranker combines a palette with the number of matches to return.
///
/// ```
/// # use chromatch::{NearestColorRanker, tailwind};
/// let ranker = NearestColorRanker::new(tailwind::palette());
/// let matches = ranker.matches("#ff0000");
///
/// assert_eq!(matches.best().map(|m| m.name()), Some("red-600"));
/// let close: Vec<&str> = matches.close().iter().map(|m| m.name()).collect();
/// assert_eq!(close, vec!["red-500", "orange-600", "orange-700", "red-700"]);
/// ```
#[derive(Clone, Debug)]
pub struct NearestColorRanker<'p> {
    palette: &'p Palette,
    top_k: usize,
}

impl<'p> NearestColorRanker<'p> {
    /// Create a new ranker returning the default number of matches.
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            top_k: Options::DEFAULT_TOP_K,
        }
    }

    /// Create a new ranker with the given options.
    pub fn with_options(palette: &'p Palette, options: &Options) -> Self {
        Self {
            palette,
            top_k: options.top_k(),
        }
    }

    /// Get the palette.
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Get the number of matches.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank the palette's entries by their difference from the query.
    ///
    /// See [`rank`].
    pub fn rank(&self, query: &str) -> Vec<RankedMatch<'p>> {
        rank(query, self.palette, self.top_k)
    }

    /// Rank the palette's entries and split the result into best and close
    /// matches.
    pub fn matches(&self, query: &str) -> Matches<'p> {
        Matches(self.rank(query))
    }
}

/// The matches for a query.
///
/// The first match is the best match, the remaining matches are close
/// matches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matches<'p>(Vec<RankedMatch<'p>>);

impl<'p> Matches<'p> {
    /// Get the best match.
    pub fn best(&self) -> Option<&RankedMatch<'p>> {
        self.0.first()
    }

    /// Get the close matches, which exclude the best match.
    pub fn close(&self) -> &[RankedMatch<'p>] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Get the number of matches.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine whether there are no matches.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over all matches.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedMatch<'p>> {
        self.0.iter()
    }

    /// Convert into the vector of all matches.
    pub fn into_vec(self) -> Vec<RankedMatch<'p>> {
        self.0
    }
}

impl<'p> IntoIterator for Matches<'p> {
    type Item = RankedMatch<'p>;
    type IntoIter = std::vec::IntoIter<RankedMatch<'p>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::{rank, rank_lab, rank_rgb, NearestColorRanker};
    use crate::opt::Options;
    use crate::palette::{Palette, PaletteEntry};
    use crate::tailwind::palette;
    use crate::{Float, Lab, Rgb};

    fn names<'a>(matches: &[super::RankedMatch<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.name()).collect()
    }

    #[test]
    fn test_red() {
        let matches = rank("#ff0000", palette(), 5);
        assert_eq!(
            names(&matches),
            vec!["red-600", "red-500", "orange-600", "orange-700", "red-700"]
        );

        let expected: [Float; 5] = [7.9476, 9.0601, 9.7468, 11.2199, 14.7905];
        for (m, delta) in matches.iter().zip(expected) {
            assert!((m.delta() - delta).abs() < 1e-4, "{} vs {}", m, delta);
        }

        assert!(matches.windows(2).all(|w| w[0].delta() <= w[1].delta()));
        assert_eq!(matches[0].hex(), "dc2626");
        assert_eq!(matches[0].css_hex(), "#dc2626");
        assert_eq!(format!("{:.2}", matches[0]), "red-600 #dc2626 ΔE = 7.95");
    }

    #[test]
    fn test_exact_match() {
        let matches = rank("3B82F6", palette(), 5);
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0].name(), "blue-500");
        assert_eq!(matches[0].delta(), 0.0);
        assert_eq!(
            names(&matches[1..]),
            vec!["sky-600", "indigo-400", "blue-400", "blue-600"]
        );
    }

    #[test]
    fn test_other_queries() {
        for (query, name) in [
            ("#808080", "neutral-500"),
            ("#123456", "sky-950"),
            ("#00ff00", "lime-400"),
            ("#000000", "black"),
            ("#ffffff", "white"),
        ] {
            assert_eq!(rank(query, palette(), 1).first().map(|m| m.name()), Some(name));
        }
    }

    #[test]
    fn test_ties() {
        let matches = rank("#fafafa", palette(), 5);
        assert_eq!(
            names(&matches),
            vec!["zinc-50", "neutral-50", "stone-50", "gray-50", "white"]
        );
        assert_eq!(matches[0].delta(), 0.0);
        assert_eq!(matches[1].delta(), 0.0);
    }

    #[test]
    fn test_invalid_queries() {
        for query in [
            "", "#", "ff000", "#ff00000", "not-a-color", "#GGGGGG", " #ff0000", "#ff0000 ",
            "##ff0000", "#ééé", "+ff000",
        ] {
            assert!(rank(query, palette(), 5).is_empty(), "{:?}", query);
        }
    }

    #[test]
    fn test_k() {
        assert!(rank("#ff0000", palette(), 0).is_empty());
        assert_eq!(rank("#ff0000", palette(), 1).len(), 1);
        assert_eq!(rank("#ff0000", palette(), 1000).len(), 244);
        assert!(rank("#ff0000", &Palette::default(), 5).is_empty());
    }

    #[test]
    fn test_idempotence() {
        let first = rank("#123456", palette(), 5);
        let second = rank("#123456", palette(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_variants() {
        let rgb = Rgb::new(0xff, 0, 0);
        let lab: Lab = rgb.to_lab();
        assert_eq!(rank("ff0000", palette(), 5), rank_rgb(rgb, palette(), 5));
        assert_eq!(rank_rgb(rgb, palette(), 5), rank_lab(&lab, palette(), 5));
        assert_eq!(
            palette().closest(&lab).map(|e| e.name()),
            rank_lab(&lab, palette(), 1).first().map(|m| m.name())
        );
    }

    #[test]
    fn test_ranker() -> Result<(), crate::error::PaletteError> {
        let ranker = NearestColorRanker::new(palette());
        assert_eq!(ranker.top_k(), 5);
        assert_eq!(ranker.palette().len(), 244);

        let matches = ranker.matches("#ff0000");
        assert_eq!(matches.len(), 5);
        assert_eq!(matches.best().map(|m| m.name()), Some("red-600"));
        assert_eq!(matches.close().len(), 4);
        assert_eq!(matches.iter().count(), 5);
        assert_eq!(matches.clone().into_vec(), ranker.rank("#ff0000"));

        let empty = ranker.matches("#ff00");
        assert!(empty.is_empty());
        assert!(empty.best().is_none());
        assert!(empty.close().is_empty());

        let options = Options::builder().top_k(2).build();
        let ranker = NearestColorRanker::with_options(palette(), &options);
        let names: Vec<&str> = ranker.matches("#ff0000").into_iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["red-600", "red-500"]);

        let small = Palette::new(vec![PaletteEntry::from_hex("only", "#123456")?]);
        let matches = NearestColorRanker::new(&small).matches("#654321");
        assert_eq!(matches.len(), 1);
        assert!(matches.close().is_empty());
        Ok(())
    }
}
