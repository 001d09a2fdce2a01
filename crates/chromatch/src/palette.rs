//! Palettes of named colors.
//!
//! A [`Palette`] is an ordered, immutable table of [`PaletteEntry`]. Each entry
//! has a non-empty name, a 24-bit color, and that color's precomputed CIE Lab
//! coordinates. Palettes are loaded once, either from [`PaletteRecord`]s,
//! from JSON with the `json` feature, or from the built-in
//! [`tailwind`](crate::tailwind) data.
//!
//! Loading validates every record. It rejects empty names, malformed hex
//! codes, and Lab coordinates that are not finite or disagree with the
//! coordinates computed from the hex code. The first offending record aborts
//! loading with a [`PaletteError`] identifying the record.
//!
//! ```
//! # use chromatch::palette::{Palette, PaletteRecord};
//! # use chromatch::error::PaletteError;
//! let palette = Palette::load([
//!     PaletteRecord::new("black", "#000000", [0.0, 0.0, 0.0]),
//!     PaletteRecord::new("red", "FF0000", [53.23288178584245, 80.10930952982204, 67.22006831026425]),
//! ])?;
//!
//! assert_eq!(palette.len(), 2);
//! let red = palette.find("red").unwrap();
//! assert_eq!(red.hex(), "ff0000");
//! assert_eq!(red.css_hex(), "#ff0000");
//! # Ok::<(), PaletteError>(())
//! ```

use std::io::Write;

use crate::core::{delta_e_2000, find_closest, within_tolerance};
use crate::error::{PaletteError, PaletteErrorKind};
use crate::opt::{Options, Volume};
use crate::{Float, Lab, Rgb};

/// The raw, unvalidated data for a palette entry.
///
/// With the `json` feature, records serialize as `{"name": ..., "hex": ...,
/// "lab": [l, a, b]}`.
#[cfg_attr(feature = "json", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteRecord {
    /// The entry's name, which must not be empty.
    pub name: String,
    /// Six hexadecimal digits, optionally preceded by `#`, in either case.
    pub hex: String,
    /// The Lab coordinates, which must match the hex code's.
    pub lab: [Float; 3],
}

impl PaletteRecord {
    /// Create a new palette record.
    pub fn new(name: impl Into<String>, hex: impl Into<String>, lab: [Float; 3]) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            lab,
        }
    }
}

impl From<&PaletteEntry> for PaletteRecord {
    fn from(value: &PaletteEntry) -> Self {
        Self {
            name: value.name.clone(),
            hex: value.hex.clone(),
            lab: *value.lab.as_ref(),
        }
    }
}

// ====================================================================================================================

/// A validated palette entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    name: String,
    hex: String,
    rgb: Rgb,
    lab: Lab,
}

impl PaletteEntry {
    /// Create a new palette entry from a name and a hex code.
    ///
    /// This function computes the entry's Lab coordinates from the hex code.
    /// It fails if the name is empty or the hex code is malformed. Since the
    /// entry is not part of a palette yet, errors have index 0.
    pub fn from_hex(name: impl Into<String>, hex: &str) -> Result<Self, PaletteError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PaletteError::new(PaletteErrorKind::EmptyName, 0, name));
        }

        match hex.parse::<Rgb>() {
            Ok(rgb) => Ok(Self::derive(name, rgb)),
            Err(error) => {
                Err(PaletteError::new(PaletteErrorKind::MalformedHex, 0, name)
                    .caused_by(Box::new(error)))
            }
        }
    }

    /// Create a new palette entry with a known non-empty name.
    pub(crate) fn derive(name: String, rgb: Rgb) -> Self {
        Self {
            name,
            hex: rgb.to_hex(),
            rgb,
            lab: rgb.to_lab(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the hex code as six lower-case hexadecimal digits without `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get the hex code as CSS color, i.e., prefixed with `#`.
    pub fn css_hex(&self) -> String {
        format!("#{}", self.hex)
    }

    /// Get the 24-bit color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the precomputed Lab coordinates.
    pub fn lab(&self) -> &Lab {
        &self.lab
    }
}

impl std::fmt::Display for PaletteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} #{}", self.name, self.hex))
    }
}

// ====================================================================================================================

/// An ordered palette of named colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a new palette from already validated entries.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Load a palette from the given records with the default options.
    pub fn load<R>(records: R) -> Result<Self, PaletteError>
    where
        R: IntoIterator<Item = PaletteRecord>,
    {
        Self::load_with(records, &Options::default(), &mut std::io::sink())
    }

    /// Load a palette from the given records.
    ///
    /// This method validates every record against the options' Lab tolerance.
    /// With [`Volume::Regular`], it writes a summary line `palette::load
    /// entries=N` to the log once all records have been validated. With
    /// [`Volume::Detailed`], it also writes one line per entry before the
    /// summary.
    pub fn load_with<R, W>(records: R, options: &Options, log: &mut W) -> Result<Self, PaletteError>
    where
        R: IntoIterator<Item = PaletteRecord>,
        W: Write + ?Sized,
    {
        let mut entries = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let entry = Self::validate(index, record, options.lab_tolerance())?;
            if options.volume() == Volume::Detailed {
                writeln!(
                    log,
                    "palette::entry index={} name={} hex={} lab={}",
                    index, entry.name, entry.hex, entry.lab
                )?;
            }
            entries.push(entry);
        }

        if options.verbose() {
            writeln!(log, "palette::load entries={}", entries.len())?;
        }

        Ok(Self { entries })
    }

    fn validate(
        index: usize,
        record: PaletteRecord,
        tolerance: Float,
    ) -> Result<PaletteEntry, PaletteError> {
        let PaletteRecord { name, hex, lab } = record;

        if name.is_empty() {
            return Err(PaletteError::new(PaletteErrorKind::EmptyName, index, name));
        }

        let rgb = match hex.parse::<Rgb>() {
            Ok(rgb) => rgb,
            Err(error) => {
                return Err(PaletteError::new(PaletteErrorKind::MalformedHex, index, name)
                    .caused_by(Box::new(error)))
            }
        };

        let stored = Lab::from(lab);
        if !stored.is_finite() {
            return Err(PaletteError::new(PaletteErrorKind::NonFiniteLab, index, name));
        }

        let computed = rgb.to_lab();
        if !within_tolerance(stored.as_ref(), computed.as_ref(), tolerance) {
            return Err(PaletteError::new(PaletteErrorKind::InconsistentLab, index, name));
        }

        Ok(PaletteEntry {
            name,
            hex: rgb.to_hex(),
            rgb,
            lab: stored,
        })
    }

    /// Load a palette from a JSON array of records with the default options.
    ///
    /// ```
    /// # use chromatch::palette::Palette;
    /// # use chromatch::error::{PaletteError, PaletteErrorKind};
    /// let palette = Palette::from_json(r##"[
    ///     {"name": "black", "hex": "#000000", "lab": [0, 0, 0]}
    /// ]"##)?;
    /// assert_eq!(palette[0].name(), "black");
    ///
    /// let error = Palette::from_json(r#"{"name": "black"}"#).unwrap_err();
    /// assert_eq!(error.kind(), PaletteErrorKind::Json);
    /// # Ok::<(), PaletteError>(())
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        Self::from_json_with(json, &Options::default(), &mut std::io::sink())
    }

    /// Load a palette from a JSON array of records.
    #[cfg(feature = "json")]
    pub fn from_json_with<W>(json: &str, options: &Options, log: &mut W) -> Result<Self, PaletteError>
    where
        W: Write + ?Sized,
    {
        let records: Vec<PaletteRecord> = serde_json::from_str(json)?;
        Self::load_with(records, options, log)
    }

    /// Serialize this palette as a JSON array of records.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, PaletteError> {
        let records: Vec<PaletteRecord> = self.entries.iter().map(PaletteRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Get the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Find the first entry with the given name.
    pub fn find(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Find the entry closest to the given color.
    ///
    /// This method uses CIEDE2000 with the given color as reference. Among
    /// equally close entries, the first one wins. It returns `None` for an
    /// empty palette.
    pub fn closest(&self, lab: &Lab) -> Option<&PaletteEntry> {
        find_closest(
            lab.as_ref(),
            self.entries.iter().map(|entry| entry.lab.as_ref()),
            delta_e_2000,
        )
        .map(|index| &self.entries[index])
    }
}

impl AsRef<[PaletteEntry]> for Palette {
    fn as_ref(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = PaletteEntry;

    /// Access the entry with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if the index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{Palette, PaletteEntry, PaletteRecord};
    use crate::error::{PaletteError, PaletteErrorKind};
    use crate::opt::Options;
    use crate::{Float, Rgb};
    use std::error::Error;

    const RED_LAB: [Float; 3] = [53.23288178584245, 80.10930952982204, 67.22006831026425];

    fn records() -> Vec<PaletteRecord> {
        vec![
            PaletteRecord::new("black", "#000000", [0.0, 0.0, 0.0]),
            PaletteRecord::new("red", "#FF0000", RED_LAB),
            PaletteRecord::new("also-black", "000000", [0.0, -0.0, 0.0]),
        ]
    }

    fn kind_of(record: PaletteRecord) -> Option<PaletteErrorKind> {
        Palette::load([record]).err().map(|e| e.kind())
    }

    #[test]
    fn test_load() -> Result<(), PaletteError> {
        let palette = Palette::load(records())?;
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette[1].hex(), "ff0000");
        assert_eq!(palette[1].rgb(), Rgb::new(0xff, 0, 0));
        assert_eq!(palette.get(3), None);
        assert_eq!(palette.find("also-black").map(|e| e.css_hex()), Some("#000000".to_string()));
        assert_eq!(palette.find("white"), None);

        let names: Vec<&str> = palette.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["black", "red", "also-black"]);
        assert_eq!(format!("{}", palette[1]), "red #ff0000");

        assert!(Palette::load(Vec::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            kind_of(PaletteRecord::new("", "000000", [0.0; 3])),
            Some(PaletteErrorKind::EmptyName)
        );
        assert_eq!(
            kind_of(PaletteRecord::new("x", "#00000", [0.0; 3])),
            Some(PaletteErrorKind::MalformedHex)
        );
        assert_eq!(
            kind_of(PaletteRecord::new("x", "#GGGGGG", [0.0; 3])),
            Some(PaletteErrorKind::MalformedHex)
        );
        assert_eq!(
            kind_of(PaletteRecord::new("x", "000000", [Float::NAN, 0.0, 0.0])),
            Some(PaletteErrorKind::NonFiniteLab)
        );
        assert_eq!(
            kind_of(PaletteRecord::new("x", "000000", [0.0, Float::INFINITY, 0.0])),
            Some(PaletteErrorKind::NonFiniteLab)
        );
        assert_eq!(
            kind_of(PaletteRecord::new("x", "ff0000", [53.2408, 80.0925, 67.2032])),
            Some(PaletteErrorKind::InconsistentLab)
        );
    }

    #[test]
    fn test_error_location() {
        let mut records = records();
        records.push(PaletteRecord::new("blue", "#0000zz", [0.0; 3]));

        let error = Palette::load(records).unwrap_err();
        assert_eq!(error.kind(), PaletteErrorKind::MalformedHex);
        assert_eq!(error.index(), Some(3));
        assert_eq!(error.name(), Some("blue"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_tolerance() -> Result<(), PaletteError> {
        let rough = [53.2329, 80.1093, 67.2201];
        assert_eq!(
            kind_of(PaletteRecord::new("red", "ff0000", rough)),
            Some(PaletteErrorKind::InconsistentLab)
        );

        let options = Options::builder().lab_tolerance(1e-3).build();
        let palette = Palette::load_with(
            [PaletteRecord::new("red", "ff0000", rough)],
            &options,
            &mut std::io::sink(),
        )?;
        assert_eq!(palette[0].lab().as_ref(), &rough);
        Ok(())
    }

    #[test]
    fn test_log() -> Result<(), PaletteError> {
        let mut log = Vec::new();
        Palette::load_with(records(), &Options::default(), &mut log)?;
        assert!(log.is_empty());

        let mut log = Vec::new();
        Palette::load_with(records(), &Options::with_log(), &mut log)?;
        assert_eq!(String::from_utf8_lossy(&log), "palette::load entries=3\n");

        let mut log = Vec::new();
        Palette::load_with(records(), &Options::with_detailed_log(), &mut log)?;
        let text = String::from_utf8_lossy(&log);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "palette::entry index=0 name=black hex=000000 lab=lab(0 0 0)");
        assert!(lines[1].starts_with("palette::entry index=1 name=red hex=ff0000 lab=lab(53.23288 "));
        assert_eq!(lines[3], "palette::load entries=3");
        Ok(())
    }

    struct ClosedSink;

    impl std::io::Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink is closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_failure() -> Result<(), PaletteError> {
        // Silent loading never touches the log.
        let palette = Palette::load_with(records(), &Options::default(), &mut ClosedSink)?;
        assert_eq!(palette.len(), 3);

        for options in [Options::with_log(), Options::with_detailed_log()] {
            let error = Palette::load_with(records(), &options, &mut ClosedSink).unwrap_err();
            assert_eq!(error.kind(), PaletteErrorKind::WriteLog);
            assert_eq!(error.index(), None);
            assert!(error.source().is_some());
        }
        Ok(())
    }

    #[test]
    fn test_entry_from_hex() -> Result<(), PaletteError> {
        let entry = PaletteEntry::from_hex("red", "#FF0000")?;
        assert_eq!(entry.hex(), "ff0000");
        crate::core::assert_same_lab!(entry.lab().as_ref(), &RED_LAB);

        assert_eq!(
            PaletteEntry::from_hex("", "ff0000").map_err(|e| e.kind()),
            Err(PaletteErrorKind::EmptyName)
        );
        assert_eq!(
            PaletteEntry::from_hex("red", "red").map_err(|e| e.kind()),
            Err(PaletteErrorKind::MalformedHex)
        );
        Ok(())
    }

    #[test]
    fn test_closest() -> Result<(), PaletteError> {
        let palette = Palette::load(records())?;
        let dark_red = Rgb::new(0x80, 0, 0).to_lab();
        assert_eq!(palette.closest(&dark_red).map(|e| e.name()), Some("red"));

        // Ties go to the first entry.
        let black = Rgb::new(0, 0, 0).to_lab();
        assert_eq!(palette.closest(&black).map(|e| e.name()), Some("black"));

        assert_eq!(Palette::default().closest(&black), None);
        Ok(())
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json() -> Result<(), PaletteError> {
        let json = r##"[
            {"name": "black", "hex": "#000000", "lab": [0, 0, 0]},
            {"name": "red", "hex": "#FF0000", "lab": [53.23288178584245, 80.10930952982204, 67.22006831026425]}
        ]"##;

        let palette = Palette::from_json(json)?;
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[1].hex(), "ff0000");

        let again = Palette::from_json(&palette.to_json()?)?;
        assert_eq!(again, palette);

        for (json, kind) in [
            ("[", PaletteErrorKind::Json),
            (r##"[{"name": "x", "hex": "000000"}]"##, PaletteErrorKind::Json),
            (r##"[{"name": "x", "hex": "000000", "lab": [0, 0]}]"##, PaletteErrorKind::Json),
            (r##"[{"name": "x", "hex": "000000", "lab": [0, 0, 0, 0]}]"##, PaletteErrorKind::Json),
            (r##"[{"name": "x", "hex": "000000", "lab": "0 0 0"}]"##, PaletteErrorKind::Json),
            (r##"[{"name": "", "hex": "000000", "lab": [0, 0, 0]}]"##, PaletteErrorKind::EmptyName),
            (r##"[{"name": "x", "hex": "#12345", "lab": [0, 0, 0]}]"##, PaletteErrorKind::MalformedHex),
            (r##"[{"name": "x", "hex": "ff0000", "lab": [0, 0, 0]}]"##, PaletteErrorKind::InconsistentLab),
        ] {
            assert_eq!(Palette::from_json(json).map_err(|e| e.kind()), Err(kind));
        }

        Ok(())
    }
}
