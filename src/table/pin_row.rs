use super::Row;
use anyhow::{bail, Error};

/// Fields 0 through 7 must be present to build a `PinRow`.
pub const PIN_ROW_MIN_FIELDS: usize = 8;

const VALUE_IDX: usize = 0;
const NAME_IDX: usize = 6;
const COMMENT_IDX: usize = 7;

/// Named view over the three columns the header cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRow<'a> {
    pub line: u64,
    /// Raw column 0, e.g. `GPIO23` or `PIN_5`.
    value_field: &'a str,
    name: &'a str,
    comment: &'a str,
}

impl<'a> PinRow<'a> {
    /// Column 0 without its 4-character prefix. Empty when the field is 4
    /// characters or shorter.
    pub fn value(&self) -> &'a str {
        let raw = self.value_field;
        match raw.char_indices().nth(4) {
            Some((at, _)) => &raw[at..],
            None => "",
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn comment(&self) -> &'a str {
        self.comment
    }

    /// A row missing its name or its value gets a blank line instead of a define.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty() || self.value_field.is_empty()
    }
}

impl<'a> TryFrom<&'a Row> for PinRow<'a> {
    type Error = Error;

    fn try_from(row: &'a Row) -> Result<Self, Self::Error> {
        if row.len() < PIN_ROW_MIN_FIELDS {
            bail!(
                "malformed row at line {}: expected at least {} fields, found {}",
                row.line,
                PIN_ROW_MIN_FIELDS,
                row.len()
            );
        }
        Ok(Self {
            line: row.line,
            value_field: &row.fields[VALUE_IDX],
            name: &row.fields[NAME_IDX],
            comment: &row.fields[COMMENT_IDX],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, fields: &[&str]) -> Row {
        Row {
            line,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_named_accessors() -> anyhow::Result<()> {
        let r = row(2, &["PIN_5", "", "", "", "", "", "LED_OUT", "green LED"]);
        let pin = PinRow::try_from(&r)?;
        assert_eq!(pin.value(), "5");
        assert_eq!(pin.name(), "LED_OUT");
        assert_eq!(pin.comment(), "green LED");
        assert!(!pin.is_placeholder());
        Ok(())
    }

    #[test]
    fn test_value_prefix_edge_cases() -> anyhow::Result<()> {
        let short = row(1, &["GPI", "", "", "", "", "", "X", ""]);
        assert_eq!(PinRow::try_from(&short)?.value(), "");

        let exact = row(1, &["GPIO", "", "", "", "", "", "X", ""]);
        assert_eq!(PinRow::try_from(&exact)?.value(), "");

        // prefix is counted in characters, not bytes
        let wide = row(1, &["µµµµ12", "", "", "", "", "", "X", ""]);
        assert_eq!(PinRow::try_from(&wide)?.value(), "12");
        Ok(())
    }

    #[test]
    fn test_placeholder_rows() -> anyhow::Result<()> {
        let no_name = row(4, &["GPIO36", "", "", "", "", "", "", "battery"]);
        assert!(PinRow::try_from(&no_name)?.is_placeholder());

        let no_value = row(5, &["", "", "", "", "", "", "BATTERY_PIN", ""]);
        assert!(PinRow::try_from(&no_value)?.is_placeholder());
        Ok(())
    }

    #[test]
    fn test_short_row_reports_line() {
        let r = row(9, &["GPIO1", "a", "b"]);
        let err = PinRow::try_from(&r).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("malformed row at line 9"), "got: {msg}");
        assert!(msg.contains("found 3"), "got: {msg}");
    }
}
