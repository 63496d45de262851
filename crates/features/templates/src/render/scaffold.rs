//! Project skeleton: package manifest, compiler and lint settings, ignore rules, README.

use forge_domain::config::{Hosting, ProjectConfig};
use serde_json::{Map, Value, json};

const NEXT_VERSION: &str = "14.2.15";
const REACT_VERSION: &str = "18.3.1";

#[must_use]
pub fn package_json(config: &ProjectConfig) -> String {
    let mut dependencies = Map::new();
    let mut dev_dependencies = Map::new();
    let mut scripts = Map::new();

    dep(&mut dependencies, "next", NEXT_VERSION);
    dep(&mut dependencies, "react", REACT_VERSION);
    dep(&mut dependencies, "react-dom", REACT_VERSION);
    dep(&mut dependencies, "@solana/web3.js", "^1.95.3");

    if config.infra.auth.uses_wallet() {
        dep(&mut dependencies, "@solana/wallet-adapter-base", "^0.9.23");
        dep(&mut dependencies, "@solana/wallet-adapter-react", "^0.15.35");
        dep(&mut dependencies, "@solana/wallet-adapter-react-ui", "^0.9.35");
        dep(&mut dependencies, "@solana/wallet-adapter-wallets", "^0.19.32");
    }
    if config.infra.auth.uses_email() {
        dep(&mut dependencies, "next-auth", "^4.24.8");
    }
    if config.token.enabled {
        dep(&mut dependencies, "@coral-xyz/anchor", "^0.30.1");
        dep(&mut dev_dependencies, "ts-node", "^10.9.2");
    }
    if config.infra.database.prisma_provider().is_some() {
        dep(&mut dependencies, "@prisma/client", "^5.20.0");
        dep(&mut dev_dependencies, "prisma", "^5.20.0");
    }

    dep(&mut dev_dependencies, "@types/node", "^20.16.10");
    dep(&mut dev_dependencies, "@types/react", "^18.3.11");
    dep(&mut dev_dependencies, "@types/react-dom", "^18.3.0");
    dep(&mut dev_dependencies, "autoprefixer", "^10.4.20");
    dep(&mut dev_dependencies, "eslint", "^8.57.1");
    dep(&mut dev_dependencies, "eslint-config-next", NEXT_VERSION);
    dep(&mut dev_dependencies, "postcss", "^8.4.47");
    dep(&mut dev_dependencies, "tailwindcss", "^3.4.13");
    dep(&mut dev_dependencies, "tsx", "^4.19.1");
    dep(&mut dev_dependencies, "typescript", "^5.6.2");

    dep(&mut scripts, "dev", "next dev");
    dep(&mut scripts, "build", "next build");
    dep(&mut scripts, "start", "next start");
    dep(&mut scripts, "lint", "next lint");
    dep(&mut scripts, "seed", "tsx scripts/seed.ts");
    if config.token.enabled {
        dep(&mut scripts, "deploy:token", "ts-node deploy/deploy-token.ts");
    }

    let manifest = json!({
        "name": config.slug(),
        "version": "0.1.0",
        "private": true,
        "scripts": scripts,
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
    });

    pretty(&manifest)
}

#[must_use]
pub fn tsconfig(_config: &ProjectConfig) -> String {
    pretty(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": false,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./*"] }
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules", "programs", "target"]
    }))
}

#[must_use]
pub fn next_config(config: &ProjectConfig) -> String {
    let output = match config.infra.hosting {
        Hosting::SelfHosted => "\n  output: \"standalone\",",
        Hosting::Vercel | Hosting::Netlify => "",
    };

    format!(
        r"/** @type {{import('next').NextConfig}} */
const nextConfig = {{
  reactStrictMode: true,{output}
  webpack: (config) => {{
    config.resolve.fallback = {{ ...config.resolve.fallback, fs: false, os: false, path: false }};
    return config;
  }},
}};

export default nextConfig;
"
    )
}

#[must_use]
pub fn eslint_config(_config: &ProjectConfig) -> String {
    pretty(&json!({
        "extends": ["next/core-web-vitals"],
        "rules": { "react/no-unescaped-entities": "off" }
    }))
}

#[must_use]
pub fn gitignore(config: &ProjectConfig) -> String {
    let mut rules = String::from(
        "# dependencies\n/node_modules\n\n# next.js\n/.next/\n/out/\nnext-env.d.ts\n\n\
         # env files\n.env\n.env*.local\n\n# misc\n.DS_Store\n*.pem\nnpm-debug.log*\n",
    );
    if config.token.enabled {
        rules.push_str("\n# anchor\n/target/\n.anchor/\ntest-ledger/\n");
    }
    if config.infra.database.prisma_provider().is_some() {
        rules.push_str("\n# prisma\n/prisma/*.db\n/prisma/*.db-journal\n");
    }
    rules
}

#[must_use]
pub fn readme(config: &ProjectConfig) -> String {
    let name = &config.project.name;
    let mut doc = format!(
        "# {name}\n\n\
         A {product} scaffold on {chain}, generated for the **{tier}** tier.\n\n\
         ## Getting started\n\n\
         ```bash\nnpm install\ncp .env.example .env.local\nnpm run dev\n```\n\n\
         Open <http://localhost:3000>.\n",
        product = config.project.product,
        chain = config.infra.chain,
        tier = config.project.tier,
    );

    if config.dapp.features.is_empty() {
        doc.push_str("\n## Features\n\nNo optional features were selected.\n");
    } else {
        doc.push_str("\n## Features\n\n");
        for feature in &config.dapp.features {
            doc.push_str(&format!("- **{}**: {}\n", feature.title(), feature.summary()));
        }
    }

    if config.token.enabled {
        doc.push_str(&format!(
            "\n## Token\n\n\
             | Name | Symbol | Decimals | Total supply |\n|---|---|---|---|\n\
             | {} | {} | {} | {} |\n\n\
             The on-chain programs live in `programs/`. Build them with `anchor build` and \
             deploy with `npm run deploy:token`.\n",
            config.token.name, config.token.symbol, config.token.decimals, config.token.total_supply,
        ));
    }

    doc.push_str("\n## Documentation\n\n- [Deployment](docs/DEPLOYMENT.md)\n- [Architecture](docs/ARCHITECTURE.md)\n");
    doc
}

fn dep(map: &mut Map<String, Value>, name: &str, version: &str) {
    map.insert(name.to_owned(), Value::String(version.to_owned()));
}

pub(crate) fn pretty(value: &Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::config::{AuthMode, Database};
    use forge_domain::tiers::Tier;

    #[test]
    fn package_json_tracks_optional_stacks() {
        let mut config = ProjectConfig::new("Acme Swap", Tier::Professional);
        let plain: Value = serde_json::from_str(&package_json(&config)).unwrap();
        assert_eq!(plain["name"], "acme-swap");
        assert!(plain["dependencies"]["@coral-xyz/anchor"].is_null());
        assert!(plain["dependencies"]["@solana/wallet-adapter-react"].is_string());

        config.token.enabled = true;
        config.infra.auth = AuthMode::Email;
        config.infra.database = Database::Postgres;
        let full: Value = serde_json::from_str(&package_json(&config)).unwrap();
        assert!(full["dependencies"]["@coral-xyz/anchor"].is_string());
        assert!(full["dependencies"]["next-auth"].is_string());
        assert!(full["dependencies"]["@solana/wallet-adapter-react"].is_null());
        assert!(full["devDependencies"]["prisma"].is_string());
        assert_eq!(full["scripts"]["deploy:token"], "ts-node deploy/deploy-token.ts");
    }

    #[test]
    fn json_documents_have_sorted_keys() {
        let config = ProjectConfig::new("Acme", Tier::Starter);
        let text = package_json(&config);
        let deps = text.find("\"dependencies\"").unwrap();
        let dev = text.find("\"devDependencies\"").unwrap();
        let name = text.find("\"name\"").unwrap();
        assert!(deps < dev && dev < name);
    }

    #[test]
    fn self_hosted_builds_standalone() {
        let mut config = ProjectConfig::new("Acme", Tier::Starter);
        assert!(!next_config(&config).contains("standalone"));
        config.infra.hosting = Hosting::SelfHosted;
        assert!(next_config(&config).contains("output: \"standalone\""));
    }
}
