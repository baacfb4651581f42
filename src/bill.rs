//! Part counts of a generated model.

use std::fmt;

use crate::catalog::Part;
use crate::placement::PlacementRecord;

/// How many of each part a model uses, in order of first use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillOfMaterials {
    lines: Vec<(Part, usize)>,
}

impl BillOfMaterials {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a PlacementRecord>) -> Self {
        let mut bill = Self::default();
        for record in records {
            match bill.lines.iter_mut().find(|(part, _)| *part == record.part) {
                Some((_, count)) => *count += 1,
                None => bill.lines.push((record.part, 1)),
            }
        }
        bill
    }

    #[must_use]
    pub fn lines(&self) -> &[(Part, usize)] {
        &self.lines
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lines.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for BillOfMaterials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (part, count)) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{count}pcs of {} /{}/", part.name, part.id)?;
        }
        Ok(())
    }
}
