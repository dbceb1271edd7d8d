//! Renders packages as text, one line per package.

#[cfg(test)]
mod tests;

use std::io::Write;

use packer_core::{Package, Result};

/// Renders a package as a line without its terminator.
pub type Formatter = fn(&Package) -> String;

/// Default rendering: `-` for an empty package, otherwise the item indices
/// joined by `,` in package order.
pub fn format_package(package: &Package) -> String {
    if package.is_empty() {
        return "-".to_string();
    }
    package
        .indices()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders every package with [`format_package`], each line `\n`-terminated.
pub fn render_packages(packages: &[Package]) -> String {
    packages
        .iter()
        .map(|package| format_package(package) + "\n")
        .collect()
}

/// Writes packages to an output sink.
pub struct PackageWriter<W: Write> {
    out: W,
    formatter: Formatter,
}

impl<W: Write> PackageWriter<W> {
    /// Creates a writer using [`format_package`].
    pub fn new(out: W) -> Self {
        Self::with_formatter(out, format_package)
    }

    /// Creates a writer with a custom line formatter.
    pub fn with_formatter(out: W, formatter: Formatter) -> Self {
        Self { out, formatter }
    }

    /// Writes one package as one line.
    pub fn write(&mut self, package: &Package) -> Result<()> {
        writeln!(self.out, "{}", (self.formatter)(package))?;
        Ok(())
    }

    /// Writes every package in order.
    pub fn write_all(&mut self, packages: &[Package]) -> Result<()> {
        packages.iter().try_for_each(|package| self.write(package))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
