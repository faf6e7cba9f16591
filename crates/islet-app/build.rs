//! Embeds git metadata so the startup log can name the exact commit.
//!
//! Outside a git checkout vergen emits placeholder values instead of failing
//! the build.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
