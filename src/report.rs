use std::fmt;

/// Summary of one analysis run, printed by the binary.
#[derive(Debug, Clone)]
pub struct Report {
    pub cells_reached: usize,
    pub distance_to_end: Option<u32>,
    pub short_jump: u32,
    pub long_jump: u32,
    pub min_saving: u32,
    pub short_count: u64,
    pub long_count: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cells reached: {}", self.cells_reached)?;
        match self.distance_to_end {
            Some(d) => writeln!(f, "Path length to end: {}", d)?,
            None => writeln!(f, "Path length to end: unreachable")?,
        }
        writeln!(
            f,
            "Shortcuts (jump <= {}, saving >= {}): {}",
            self.short_jump, self.min_saving, self.short_count
        )?;
        writeln!(
            f,
            "Shortcuts (jump <= {}, saving >= {}): {}",
            self.long_jump, self.min_saving, self.long_count
        )?;
        Ok(())
    }
}
