//! Application shell: root layout, home page, navigation, site constants and styling.

use crate::render::{SiteContext, ts_string};
use forge_domain::config::ProjectConfig;

/// `lib/site.ts`: the only place user-supplied strings enter the TypeScript sources.
#[must_use]
pub fn site_module(config: &ProjectConfig, ctx: &SiteContext<'_>) -> String {
    let mut links = String::new();
    for link in ctx.links {
        links.push_str(&format!(
            "    {{ href: {}, label: {} }},\n",
            ts_string(&format!("/{}", link.slug)),
            ts_string(&link.label)
        ));
    }

    let token = if config.token.enabled {
        format!(
            "{{\n    name: {},\n    symbol: {},\n    decimals: {},\n    totalSupply: {},\n    \
             nonFungible: {},\n    programId: {},\n  }}",
            ts_string(&config.token.name),
            ts_string(&config.token.symbol),
            config.token.decimals,
            ts_string(&config.token.total_supply.to_string()),
            config.token.nft,
            ts_string(ctx.token_program.unwrap_or_default()),
        )
    } else {
        "null".to_owned()
    };

    let staking = match (config.staking(), ctx.staking_program) {
        (Some(params), Some(program)) => format!(
            "{{\n    programId: {},\n    rewardRateBps: {},\n    lockDays: {},\n  }}",
            ts_string(program),
            params.reward_rate_bps,
            params.lock_days
        ),
        _ => "null".to_owned(),
    };

    format!(
        "// Generated project constants.\n\n\
         export const site = {{\n  \
           name: {name},\n  \
           product: {product},\n  \
           tier: {tier},\n  \
           brandColor: {color},\n  \
           chain: {chain},\n  \
           rpcUrl: process.env.NEXT_PUBLIC_RPC_URL ?? {rpc},\n  \
           links: [\n{links}  ],\n  \
           token: {token},\n  \
           staking: {staking},\n\
         }} as const;\n\n\
         export type SiteLink = (typeof site.links)[number];\n",
        name = ts_string(&config.project.name),
        product = ts_string(&config.project.product.to_string()),
        tier = ts_string(&config.project.tier.to_string()),
        color = ts_string(&config.dapp.brand_color),
        chain = ts_string(&config.infra.chain.to_string()),
        rpc = ts_string(config.infra.chain.devnet_rpc()),
    )
}

#[must_use]
pub fn root_layout(config: &ProjectConfig) -> String {
    let (import, open, close) = if config.infra.auth.uses_wallet() {
        (
            "import { WalletProvider } from \"@/components/WalletProvider\";\n",
            "<WalletProvider>",
            "</WalletProvider>",
        )
    } else {
        ("", "<>", "</>")
    };

    format!(
        r#"import type {{ Metadata }} from "next";
import "./globals.css";
import {{ Navigation }} from "@/components/Navigation";
{import}import {{ site }} from "@/lib/site";

export const metadata: Metadata = {{
  title: site.name,
  description: `${{site.name}} on ${{site.chain}}`,
}};

export default function RootLayout({{ children }}: {{ children: React.ReactNode }}) {{
  return (
    <html lang="en">
      <body className="min-h-screen bg-slate-950 text-slate-100">
        {open}
          <Navigation />
          <main className="mx-auto max-w-5xl px-6 py-10">{{children}}</main>
        {close}
      </body>
    </html>
  );
}}
"#
    )
}

#[must_use]
pub fn home_page(config: &ProjectConfig) -> String {
    let token_card = if config.token.enabled {
        r#"
      {site.token && (
        <section className="rounded-xl border border-slate-800 p-6">
          <h2 className="text-xl font-semibold">
            {site.token.name} ({site.token.symbol})
          </h2>
          <p className="mt-2 text-slate-400">Total supply: {site.token.totalSupply}</p>
        </section>
      )}"#
    } else {
        ""
    };

    format!(
        r#"import Link from "next/link";
import {{ site }} from "@/lib/site";

export default function HomePage() {{
  return (
    <div className="space-y-10">
      <header className="space-y-4">
        <h1 className="text-4xl font-bold text-brand">{{site.name}}</h1>
        <p className="text-slate-400">Built on {{site.chain}}.</p>
      </header>{token_card}
      <nav className="grid gap-4 sm:grid-cols-2">
        {{site.links.map((link) => (
          <Link
            key={{link.href}}
            href={{link.href}}
            className="rounded-lg border border-slate-800 p-4 hover:border-brand"
          >
            {{link.label}}
          </Link>
        ))}}
      </nav>
    </div>
  );
}}
"#
    )
}

#[must_use]
pub fn navigation(config: &ProjectConfig) -> String {
    let wallet = if config.infra.auth.uses_wallet() {
        (
            "import { WalletMultiButton } from \"@solana/wallet-adapter-react-ui\";\n",
            "\n        <WalletMultiButton />",
        )
    } else {
        ("", "")
    };
    let (wallet_import, wallet_button) = wallet;

    format!(
        r#""use client";

import Link from "next/link";
{wallet_import}import {{ site }} from "@/lib/site";

export function Navigation() {{
  return (
    <header className="border-b border-slate-800">
      <div className="mx-auto flex max-w-5xl items-center justify-between px-6 py-4">
        <Link href="/" className="font-semibold text-brand">
          {{site.name}}
        </Link>
        <ul className="flex gap-4 text-sm">
          {{site.links.map((link) => (
            <li key={{link.href}}>
              <Link href={{link.href}}>{{link.label}}</Link>
            </li>
          ))}}
        </ul>{wallet_button}
      </div>
    </header>
  );
}}
"#
    )
}

#[must_use]
pub fn wallet_provider(config: &ProjectConfig) -> String {
    format!(
        r#""use client";

import {{ useMemo }} from "react";
import {{ ConnectionProvider, WalletProvider as AdapterProvider }} from "@solana/wallet-adapter-react";
import {{ WalletModalProvider }} from "@solana/wallet-adapter-react-ui";
import {{ PhantomWalletAdapter, SolflareWalletAdapter }} from "@solana/wallet-adapter-wallets";
import "@solana/wallet-adapter-react-ui/styles.css";

const DEFAULT_RPC = {rpc};

export function WalletProvider({{ children }}: {{ children: React.ReactNode }}) {{
  const endpoint = process.env.NEXT_PUBLIC_RPC_URL ?? DEFAULT_RPC;
  const wallets = useMemo(() => [new PhantomWalletAdapter(), new SolflareWalletAdapter()], []);

  return (
    <ConnectionProvider endpoint={{endpoint}}>
      <AdapterProvider wallets={{wallets}} autoConnect>
        <WalletModalProvider>{{children}}</WalletModalProvider>
      </AdapterProvider>
    </ConnectionProvider>
  );
}}
"#,
        rpc = ts_string(config.infra.chain.devnet_rpc()),
    )
}

#[must_use]
pub fn global_css(_config: &ProjectConfig) -> String {
    String::from(
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n\
         :root {\n  color-scheme: dark;\n}\n\n\
         body {\n  font-family: ui-sans-serif, system-ui, sans-serif;\n}\n",
    )
}

#[must_use]
pub fn tailwind_config(config: &ProjectConfig) -> String {
    format!(
        r#"import type {{ Config }} from "tailwindcss";

const config: Config = {{
  content: ["./app/**/*.{{ts,tsx}}", "./components/**/*.{{ts,tsx}}"],
  theme: {{
    extend: {{
      colors: {{
        brand: {color},
      }},
    }},
  }},
  plugins: [],
}};

export default config;
"#,
        color = ts_string(&config.dapp.brand_color),
    )
}

#[must_use]
pub fn postcss_config(_config: &ProjectConfig) -> String {
    String::from(
        "/** @type {import('postcss-load-config').Config} */\n\
         const config = {\n  plugins: {\n    tailwindcss: {},\n    autoprefixer: {},\n  },\n};\n\n\
         export default config;\n",
    )
}
