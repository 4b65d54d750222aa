use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use eodata::checksum;
use eodata::cli::{CliArgs, Command};
use eodata::recent_folders::RecentFolders;
use eodata::table::CellRange;
use eodata::{Section, Session, StudioConfig};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    eodata::tracing::init(args.verbose);

    let config = StudioConfig::load();
    let mut session = Session::new(config.section_layout, config.default_section);
    let anchor = args.command.paste_anchor().unwrap_or_default();

    match args.command {
        Command::Check { folder } => check(&folder),
        Command::Resave { folder, to } => {
            open(&mut session, &folder)?;
            let written = match to {
                Some(dest) => session.save_as(&dest),
                None => session.save(),
            }
            .context("Save failed")?;
            println!("Wrote {} files", written.len());
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { folder, section } => {
            open(&mut session, &folder)?;
            let payload = export(&mut session, section);
            std::io::stdout()
                .write_all(payload.as_bytes())
                .context("Could not write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Import {
            folder,
            section,
            input,
            to,
            ..
        } => {
            let (row, col) = anchor;
            let payload = std::fs::read_to_string(&input)
                .with_context(|| format!("Could not read {}", input.display()))?;

            open(&mut session, &folder)?;
            session.set_section(section);
            if !session.select(CellRange::cell(row, col)) {
                bail!(
                    "Cell ({}, {}) is outside the {} grid ({} rows)",
                    row + 1,
                    col + 1,
                    section,
                    session.row_count()
                );
            }

            let pasted = session.paste(&payload);
            match to {
                Some(dest) => session.save_as(&dest),
                None => session.save(),
            }
            .context("Save failed")?;
            println!("Pasted {} cells into {}", pasted, section);
            Ok(ExitCode::SUCCESS)
        }
        Command::Recent { clear } => {
            let mut recent = RecentFolders::load();
            if clear {
                recent.clear();
                recent.save().context("Could not save recent folders")?;
                return Ok(ExitCode::SUCCESS);
            }
            for entry in &recent.entries {
                println!("{}\t{}", entry.display_name(), entry.path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Open `folder`, keeping the recent list in step with the outcome
fn open(session: &mut Session, folder: &Path) -> Result<()> {
    let mut recent = RecentFolders::load();
    let result = session.open_folder(folder);

    match &result {
        Ok(()) => recent.add(folder.to_path_buf()),
        Err(_) => recent.remove(folder),
    }
    if let Err(e) = recent.save() {
        tracing::warn!("Failed to save recent folders: {}", e);
    }

    result.with_context(|| format!("Could not open data folder {}", folder.display()))
}

fn check(folder: &Path) -> Result<ExitCode> {
    let verification = checksum::verify(folder)
        .with_context(|| format!("Could not verify {}", folder.display()))?;

    if verification.is_valid() {
        println!("OK {}", verification.expected);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("MISMATCH");
        println!("  expected: {}", verification.expected);
        println!("  stored:   {}", verification.stored.join(" / "));
        Ok(ExitCode::FAILURE)
    }
}

/// Whole grid of `section` as a clipboard payload
fn export(session: &mut Session, section: Section) -> String {
    session.set_section(section);
    let row_count = session.row_count();
    if row_count == 0 || !session.select_rows(0, row_count - 1) {
        return String::new();
    }
    session.copy().unwrap_or_default()
}
