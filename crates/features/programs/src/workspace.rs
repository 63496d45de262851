//! Anchor workspace files: `Anchor.toml`, the root `Cargo.toml` and per-program manifests.

use crate::id::ProgramId;
use forge_domain::config::Chain;

const ANCHOR_VERSION: &str = "0.30.1";

/// A program crate of the generated Anchor workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramCrate {
    pub name: String,
    pub id: ProgramId,
}

impl ProgramCrate {
    #[must_use]
    pub fn manifest_path(&self) -> String {
        format!("programs/{}/Cargo.toml", self.name)
    }

    #[must_use]
    pub fn source_path(&self) -> String {
        format!("programs/{}/src/lib.rs", self.name)
    }
}

#[must_use]
pub fn anchor_toml(programs: &[ProgramCrate], chain: Chain) -> String {
    let mut entries = String::new();
    for program in programs {
        entries.push_str(&format!("{} = \"{}\"\n", program.name, program.id));
    }

    format!(
        "[toolchain]\nanchor_version = \"{ANCHOR_VERSION}\"\n\n\
         [features]\nresolution = true\nskip-lint = false\n\n\
         [programs.localnet]\n{entries}\n\
         [programs.devnet]\n{entries}\n\
         [provider]\ncluster = \"{cluster}\"\nwallet = \"~/.config/solana/id.json\"\n\n\
         [scripts]\ndeploy-token = \"npx ts-node deploy/deploy-token.ts\"\n",
        cluster = chain.devnet_rpc(),
    )
}

/// Root `Cargo.toml` gathering every program crate.
#[must_use]
pub fn workspace_manifest() -> String {
    String::from(
        "[workspace]\nmembers = [\"programs/*\"]\nresolver = \"2\"\n\n\
         [profile.release]\noverflow-checks = true\nlto = \"fat\"\ncodegen-units = 1\n\n\
         [profile.release.build-override]\nopt-level = 3\nincremental = false\ncodegen-units = 1\n",
    )
}

/// `programs/<name>/Cargo.toml`.
#[must_use]
pub fn program_manifest(program: &ProgramCrate, description: &str) -> String {
    format!(
        "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\n\
         description = \"{description}\"\nedition = \"2021\"\n\n\
         [lib]\ncrate-type = [\"cdylib\", \"lib\"]\nname = \"{name}\"\n\n\
         [features]\ndefault = []\ncpi = [\"no-entrypoint\"]\nno-entrypoint = []\nno-idl = []\n\
         no-log-ix-name = []\nidl-build = [\"anchor-lang/idl-build\"]\n\n\
         [dependencies]\n\
         anchor-lang = {{ version = \"{ANCHOR_VERSION}\", features = [\"init-if-needed\"] }}\n",
        name = program.name,
    )
}
