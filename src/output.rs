// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Renders display records in the verbose or compact layout, plus warnings and errors.

use crate::records::DisplayRecord;
use crate::style::{ColorClass, colorize, network_text, port_fragments, status_class};
use std::io::{self, Write};

/// Layout used to render containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One labelled block per container
    #[default]
    Verbose,
    /// One line per container
    Compact,
}

impl Layout {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Layout::Compact
        } else {
            Layout::Verbose
        }
    }
}

/// Handles CLI output based on the configured layout.
pub struct Output {
    layout: Layout,
}

impl Output {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Render records to standard output.
    pub fn render(&self, records: &[DisplayRecord]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_records(&mut out, records)?;
        out.flush()
    }

    /// Render records to `out`, in input order.
    pub fn write_records<W: Write>(
        &self,
        out: &mut W,
        records: &[DisplayRecord],
    ) -> io::Result<()> {
        let total = records.len();
        for (index, record) in records.iter().enumerate() {
            let styled = StyledRecord::new(record);
            match self.layout {
                Layout::Verbose => styled.write_block(out, index + 1, total)?,
                Layout::Compact => writeln!(out, "{}", styled.compact_line())?,
            }
        }
        Ok(())
    }

    /// Print a non-fatal warning.
    pub fn warning(&self, message: &str) {
        eprintln!("Warning: {message}");
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    /// Print a suggestion following an error.
    pub fn hint(&self, message: &str) {
        eprintln!("Hint: {message}");
    }
}

/// A record with every field already colored.
struct StyledRecord {
    id: String,
    image: String,
    command: String,
    created: String,
    status: String,
    ports: String,
    compact_ports: String,
    names: String,
    network: String,
}

impl StyledRecord {
    fn new(record: &DisplayRecord) -> Self {
        let fragments = port_fragments(&record.ports);

        let ports = fragments
            .iter()
            .map(|f| f.colored())
            .collect::<Vec<_>>()
            .join(", ");
        let compact_ports = fragments
            .iter()
            .map(|f| colorize(f.compact_token(), f.class))
            .collect::<Vec<_>>()
            .join(",");

        Self {
            id: colorize(&record.id, ColorClass::Info),
            image: colorize(&record.image, ColorClass::Success),
            command: colorize(&record.command, ColorClass::Warning),
            created: colorize(&record.created_at, ColorClass::Emphasis),
            status: colorize(&record.status, status_class(&record.status)),
            ports,
            compact_ports,
            names: colorize(&record.names, ColorClass::Link),
            network: colorize(network_text(&record.networks), ColorClass::Warning),
        }
    }

    fn write_block<W: Write>(&self, out: &mut W, position: usize, total: usize) -> io::Result<()> {
        writeln!(out, "Container {position}/{total}")?;
        writeln!(out, "ID: {}", self.id)?;
        writeln!(out, "Image: {}", self.image)?;
        writeln!(out, "Command: {}", self.command)?;
        writeln!(out, "Created: {}", self.created)?;
        writeln!(out, "Status: {}", self.status)?;
        writeln!(out, "Ports: {}", self.ports)?;
        writeln!(out, "Names: {}", self.names)?;
        writeln!(out, "Network: {}", self.network)?;
        writeln!(out)
    }

    fn compact_line(&self) -> String {
        format!(
            "{}-{}-{}-[{}]",
            self.names, self.id, self.network, self.compact_ports
        )
    }
}
