//! Feature pages plus the generic page, API route and component stubs.

use crate::render::{pascal_ident, title_case, ts_string};
use forge_domain::config::ProjectConfig;

#[must_use]
pub fn staking_page(config: &ProjectConfig) -> String {
    let params = config.staking().unwrap_or_default();
    format!(
        r#""use client";

import {{ useState }} from "react";
import {{ site }} from "@/lib/site";
import {{ StakeForm }} from "@/components/StakeForm";
import {{ RewardsCard }} from "@/components/RewardsCard";

const REWARD_RATE_BPS = {rate};
const LOCK_DAYS = {lock};

export default function StakingPage() {{
  const [staked, setStaked] = useState(0);

  return (
    <section className="space-y-6">
      <h1 className="text-3xl font-bold">Stake {{site.token?.symbol ?? "tokens"}}</h1>
      <p className="text-slate-400">
        Earn {{REWARD_RATE_BPS / 100}}% APR. Stakes unlock after {{LOCK_DAYS}} days.
      </p>
      <StakeForm onStaked={{(amount: number) => setStaked((s) => s + amount)}} />
      <RewardsCard staked={{staked}} rateBps={{REWARD_RATE_BPS}} />
    </section>
  );
}}
"#,
        rate = params.reward_rate_bps,
        lock = params.lock_days,
    )
}

#[must_use]
pub fn governance_page(_config: &ProjectConfig) -> String {
    String::from(
        r#""use client";

import { useEffect, useState } from "react";
import { ProposalCard } from "@/components/ProposalCard";
import { VoteButton } from "@/components/VoteButton";

type Proposal = { id: string; title: string; votesFor: number; votesAgainst: number };

export default function GovernancePage() {
  const [proposals, setProposals] = useState<Proposal[]>([]);

  useEffect(() => {
    fetch("/api/proposals")
      .then((res) => res.json())
      .then((data) => setProposals(data.items ?? []))
      .catch(() => setProposals([]));
  }, []);

  return (
    <section className="space-y-6">
      <h1 className="text-3xl font-bold">Governance</h1>
      {proposals.length === 0 && <p className="text-slate-400">No active proposals.</p>}
      {proposals.map((proposal) => (
        <div key={proposal.id} className="space-y-2">
          <ProposalCard />
          <VoteButton />
        </div>
      ))}
    </section>
  );
}
"#,
    )
}

#[must_use]
pub fn swap_page(_config: &ProjectConfig) -> String {
    String::from(
        r#""use client";

import { useState } from "react";
import { TokenSelect } from "@/components/TokenSelect";

export default function SwapPage() {
  const [amount, setAmount] = useState("");
  const [quote, setQuote] = useState<string | null>(null);

  async function requestQuote() {
    const res = await fetch(`/api/quote?amount=${encodeURIComponent(amount)}`);
    const data = await res.json();
    setQuote(JSON.stringify(data));
  }

  return (
    <section className="space-y-6">
      <h1 className="text-3xl font-bold">Swap</h1>
      <TokenSelect />
      <input
        className="w-full rounded border border-slate-700 bg-transparent p-2"
        placeholder="Amount"
        value={amount}
        onChange={(e) => setAmount(e.target.value)}
      />
      <button className="rounded bg-brand px-4 py-2" onClick={requestQuote}>
        Get quote
      </button>
      {quote && <pre className="text-xs text-slate-400">{quote}</pre>}
    </section>
  );
}
"#,
    )
}

#[must_use]
pub fn nft_mint_page(config: &ProjectConfig) -> String {
    let supply_note = if config.token.enabled && config.token.nft {
        "Each mint produces a unique, non-fungible token."
    } else {
        "Mint a collectible from this collection."
    };

    format!(
        r#""use client";

import {{ site }} from "@/lib/site";
import {{ MintButton }} from "@/components/MintButton";
import {{ NftGallery }} from "@/components/NftGallery";

const NOTE = {note};

export default function MintPage() {{
  return (
    <section className="space-y-6">
      <h1 className="text-3xl font-bold">Mint on {{site.name}}</h1>
      <p className="text-slate-400">{{NOTE}}</p>
      <MintButton />
      <NftGallery />
    </section>
  );
}}
"#,
        note = ts_string(supply_note),
    )
}

/// Placeholder page for any slug or feature without a dedicated page.
#[must_use]
pub fn generic_page(name: &str) -> String {
    let ident = pascal_ident(name);
    let title = title_case(name);
    let title = if title.is_empty() { name.to_owned() } else { title };

    format!(
        r#"const TITLE = {title};

export default function {ident}Page() {{
  return (
    <section className="space-y-4">
      <h1 className="text-3xl font-bold">{{TITLE}}</h1>
      <p className="text-slate-400">This page is ready for your content.</p>
    </section>
  );
}}
"#,
        title = ts_string(&title),
    )
}

/// Next.js route handler stub answering `GET` and `POST` with JSON.
#[must_use]
pub fn api_stub(route: &str) -> String {
    format!(
        r#"import {{ NextResponse }} from "next/server";

const ROUTE = {route};

export async function GET() {{
  return NextResponse.json({{ route: ROUTE, items: [] }});
}}

export async function POST(request: Request) {{
  const body = await request.json().catch(() => null);
  return NextResponse.json({{ route: ROUTE, received: body }}, {{ status: 201 }});
}}
"#,
        route = ts_string(route),
    )
}

/// Client component stub named after `name`.
#[must_use]
pub fn component_stub(name: &str) -> String {
    let ident = pascal_ident(name);
    format!(
        r#""use client";

type {ident}Props = Record<string, unknown>;

export function {ident}(props: {ident}Props) {{
  return (
    <div className="rounded-lg border border-slate-800 p-4" data-component={label}>
      {{Object.keys(props).length > 0 ? JSON.stringify(props) : {label}}}
    </div>
  );
}}
"#,
        label = ts_string(&ident),
    )
}
