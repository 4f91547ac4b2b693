//! The monster roster.
//!
//! Thirty-six templates across four level tiers. Stats are balanced at each
//! template's `base_level`; spawning at another level rescales them.
//! Recruitment rates are per 10 000.

use game_core::MonsterTemplate;

/// Tier 1: levels 1-5.
pub const TIER_NOVICE: [MonsterTemplate; 12] = [
    MonsterTemplate {
        name: "Inflation Goblin",
        max_hp: 50,
        max_mp: 10,
        attack: 15,
        defense: 5,
        gold_reward: 20,
        ticket_reward: 1,
        recruitment_rate: 1_500,
        base_level: 1,
        glyph: "👹",
        description: "A small fiend that drives prices ever upward.",
    },
    MonsterTemplate {
        name: "Deflation Slime",
        max_hp: 40,
        max_mp: 5,
        attack: 10,
        defense: 8,
        gold_reward: 15,
        ticket_reward: 1,
        recruitment_rate: 2_000,
        base_level: 1,
        glyph: "🟢",
        description: "A sluggish ooze that drags prices down with it.",
    },
    MonsterTemplate {
        name: "Coin Slime",
        max_hp: 35,
        max_mp: 3,
        attack: 8,
        defense: 6,
        gold_reward: 12,
        ticket_reward: 1,
        recruitment_rate: 2_500,
        base_level: 1,
        glyph: "🪙",
        description: "A slime of loose change. A gentle first opponent.",
    },
    MonsterTemplate {
        name: "Banknote Goblin",
        max_hp: 45,
        max_mp: 8,
        attack: 12,
        defense: 7,
        gold_reward: 18,
        ticket_reward: 1,
        recruitment_rate: 1_800,
        base_level: 1,
        glyph: "🧾",
        description: "A goblin that hoards crumpled paper money.",
    },
    MonsterTemplate {
        name: "Piggy Bank Slime",
        max_hp: 55,
        max_mp: 12,
        attack: 14,
        defense: 9,
        gold_reward: 22,
        ticket_reward: 1,
        recruitment_rate: 1_600,
        base_level: 2,
        glyph: "🐷",
        description: "A slime that has grasped the idea of saving.",
    },
    MonsterTemplate {
        name: "Interest Kobold",
        max_hp: 60,
        max_mp: 15,
        attack: 16,
        defense: 10,
        gold_reward: 25,
        ticket_reward: 1,
        recruitment_rate: 1_400,
        base_level: 2,
        glyph: "👺",
        description: "A kobold that collects interest on every favor.",
    },
    MonsterTemplate {
        name: "Exchange Slime",
        max_hp: 50,
        max_mp: 10,
        attack: 13,
        defense: 8,
        gold_reward: 20,
        ticket_reward: 1,
        recruitment_rate: 1_700,
        base_level: 2,
        glyph: "💱",
        description: "A slime that quotes a different rate every hour.",
    },
    MonsterTemplate {
        name: "Investor Mouse",
        max_hp: 40,
        max_mp: 8,
        attack: 11,
        defense: 9,
        gold_reward: 17,
        ticket_reward: 1,
        recruitment_rate: 1_900,
        base_level: 1,
        glyph: "🐭",
        description: "A small mouse learning to invest its crumbs.",
    },
    MonsterTemplate {
        name: "Credit Kobold",
        max_hp: 58,
        max_mp: 13,
        attack: 16,
        defense: 10,
        gold_reward: 24,
        ticket_reward: 1,
        recruitment_rate: 1_300,
        base_level: 3,
        glyph: "⭐",
        description: "A kobold that rates everyone it meets.",
    },
    MonsterTemplate {
        name: "Risk Slime",
        max_hp: 42,
        max_mp: 9,
        attack: 11,
        defense: 8,
        gold_reward: 16,
        ticket_reward: 1,
        recruitment_rate: 2_000,
        base_level: 1,
        glyph: "⚠️",
        description: "A jittery slime that never hedges its bets.",
    },
    MonsterTemplate {
        name: "Compound Slime",
        max_hp: 49,
        max_mp: 11,
        attack: 13,
        defense: 9,
        gold_reward: 20,
        ticket_reward: 1,
        recruitment_rate: 1_700,
        base_level: 2,
        glyph: "📊",
        description: "A slime that grows a little stronger every period.",
    },
    MonsterTemplate {
        name: "GDP Golem",
        max_hp: 57,
        max_mp: 13,
        attack: 15,
        defense: 10,
        gold_reward: 24,
        ticket_reward: 1,
        recruitment_rate: 1_300,
        base_level: 3,
        glyph: "📈",
        description: "A golem assembled from quarterly output figures.",
    },
];

/// Tier 2: levels 6-10.
pub const TIER_INTERMEDIATE: [MonsterTemplate; 9] = [
    MonsterTemplate {
        name: "Stock Orc",
        max_hp: 80,
        max_mp: 20,
        attack: 25,
        defense: 12,
        gold_reward: 50,
        ticket_reward: 3,
        recruitment_rate: 1_000,
        base_level: 6,
        glyph: "🐗",
        description: "An orc whose mood tracks the equity market.",
    },
    MonsterTemplate {
        name: "Forex Mermaid",
        max_hp: 70,
        max_mp: 30,
        attack: 20,
        defense: 15,
        gold_reward: 45,
        ticket_reward: 2,
        recruitment_rate: 1_200,
        base_level: 6,
        glyph: "🧜‍♀️",
        description: "A mermaid who sways currency pairs with her song.",
    },
    MonsterTemplate {
        name: "Bond Witch",
        max_hp: 90,
        max_mp: 40,
        attack: 22,
        defense: 18,
        gold_reward: 60,
        ticket_reward: 4,
        recruitment_rate: 800,
        base_level: 7,
        glyph: "🧙‍♀️",
        description: "A witch who rules the bond market and its spreads.",
    },
    MonsterTemplate {
        name: "Derivative Demon",
        max_hp: 100,
        max_mp: 35,
        attack: 28,
        defense: 20,
        gold_reward: 70,
        ticket_reward: 5,
        recruitment_rate: 600,
        base_level: 8,
        glyph: "😈",
        description: "A demon whose value derives from something else.",
    },
    MonsterTemplate {
        name: "Property Troll",
        max_hp: 95,
        max_mp: 25,
        attack: 26,
        defense: 22,
        gold_reward: 65,
        ticket_reward: 4,
        recruitment_rate: 700,
        base_level: 7,
        glyph: "🏠",
        description: "A troll that collects rent under every bridge.",
    },
    MonsterTemplate {
        name: "Commodity Demon",
        max_hp: 98,
        max_mp: 30,
        attack: 27,
        defense: 19,
        gold_reward: 68,
        ticket_reward: 5,
        recruitment_rate: 600,
        base_level: 8,
        glyph: "⛽",
        description: "A demon that corners oil, grain, and ore alike.",
    },
    MonsterTemplate {
        name: "Crypto Slime",
        max_hp: 72,
        max_mp: 40,
        attack: 20,
        defense: 13,
        gold_reward: 46,
        ticket_reward: 3,
        recruitment_rate: 1_200,
        base_level: 6,
        glyph: "₿",
        description: "A volatile slime of uncertain intrinsic value.",
    },
    MonsterTemplate {
        name: "Blockchain Troll",
        max_hp: 105,
        max_mp: 42,
        attack: 29,
        defense: 23,
        gold_reward: 75,
        ticket_reward: 6,
        recruitment_rate: 500,
        base_level: 9,
        glyph: "⛓️",
        description: "A troll whose every move is immutably recorded.",
    },
    MonsterTemplate {
        name: "Index Elemental",
        max_hp: 75,
        max_mp: 38,
        attack: 21,
        defense: 17,
        gold_reward: 52,
        ticket_reward: 3,
        recruitment_rate: 1_000,
        base_level: 6,
        glyph: "💎",
        description: "An elemental made of a little bit of everything.",
    },
];

/// Tier 3: levels 11-15.
pub const TIER_ADVANCED: [MonsterTemplate; 8] = [
    MonsterTemplate {
        name: "Interest Rate Dragon",
        max_hp: 150,
        max_mp: 50,
        attack: 35,
        defense: 20,
        gold_reward: 100,
        ticket_reward: 5,
        recruitment_rate: 500,
        base_level: 11,
        glyph: "🐉",
        description: "A mighty dragon that moves rates with a wingbeat.",
    },
    MonsterTemplate {
        name: "Central Bank Dragon",
        max_hp: 160,
        max_mp: 55,
        attack: 38,
        defense: 22,
        gold_reward: 110,
        ticket_reward: 6,
        recruitment_rate: 400,
        base_level: 12,
        glyph: "🏛️",
        description: "A dragon that guards the printing press itself.",
    },
    MonsterTemplate {
        name: "Hedge Fund Master",
        max_hp: 170,
        max_mp: 60,
        attack: 40,
        defense: 25,
        gold_reward: 120,
        ticket_reward: 7,
        recruitment_rate: 300,
        base_level: 13,
        glyph: "🎯",
        description: "A master who profits whichever way the wind blows.",
    },
    MonsterTemplate {
        name: "Venture Witch",
        max_hp: 145,
        max_mp: 65,
        attack: 34,
        defense: 19,
        gold_reward: 95,
        ticket_reward: 5,
        recruitment_rate: 600,
        base_level: 11,
        glyph: "🚀",
        description: "A witch who bets big on ten moonshots at once.",
    },
    MonsterTemplate {
        name: "Leverage Dragon",
        max_hp: 180,
        max_mp: 55,
        attack: 43,
        defense: 27,
        gold_reward: 130,
        ticket_reward: 8,
        recruitment_rate: 200,
        base_level: 14,
        glyph: "⚡",
        description: "A dragon that borrows strength it may not repay.",
    },
    MonsterTemplate {
        name: "Securitization Witch",
        max_hp: 152,
        max_mp: 57,
        attack: 37,
        defense: 22,
        gold_reward: 107,
        ticket_reward: 6,
        recruitment_rate: 400,
        base_level: 12,
        glyph: "📦",
        description: "A witch who bundles debts into tidy parcels.",
    },
    MonsterTemplate {
        name: "Derivatives Master",
        max_hp: 185,
        max_mp: 68,
        attack: 45,
        defense: 28,
        gold_reward: 135,
        ticket_reward: 9,
        recruitment_rate: 100,
        base_level: 15,
        glyph: "🎲",
        description: "The grandmaster of contracts upon contracts.",
    },
    MonsterTemplate {
        name: "Portfolio Master",
        max_hp: 160,
        max_mp: 61,
        attack: 39,
        defense: 24,
        gold_reward: 113,
        ticket_reward: 7,
        recruitment_rate: 300,
        base_level: 13,
        glyph: "📊",
        description: "A master who never puts two eggs in one basket.",
    },
];

/// Tier 4: levels 16-20.
pub const TIER_ELITE: [MonsterTemplate; 7] = [
    MonsterTemplate {
        name: "Regulation Witch",
        max_hp: 195,
        max_mp: 72,
        attack: 48,
        defense: 31,
        gold_reward: 150,
        ticket_reward: 9,
        recruitment_rate: 200,
        base_level: 16,
        glyph: "📋",
        description: "A witch whose fine print binds tighter than chains.",
    },
    MonsterTemplate {
        name: "Bubble King",
        max_hp: 200,
        max_mp: 75,
        attack: 50,
        defense: 32,
        gold_reward: 160,
        ticket_reward: 10,
        recruitment_rate: 200,
        base_level: 17,
        glyph: "🫧",
        description: "A king whose glittering realm can pop at any moment.",
    },
    MonsterTemplate {
        name: "Financial Crisis Dragon",
        max_hp: 220,
        max_mp: 80,
        attack: 55,
        defense: 35,
        gold_reward: 180,
        ticket_reward: 12,
        recruitment_rate: 100,
        base_level: 18,
        glyph: "🌋",
        description: "A colossal dragon that topples banks in its wake.",
    },
    MonsterTemplate {
        name: "Liquidity Crisis Dragon",
        max_hp: 230,
        max_mp: 82,
        attack: 58,
        defense: 36,
        gold_reward: 190,
        ticket_reward: 13,
        recruitment_rate: 80,
        base_level: 19,
        glyph: "🌊",
        description: "A dragon that drinks every market dry.",
    },
    MonsterTemplate {
        name: "Hyperinflation Dragon",
        max_hp: 248,
        max_mp: 93,
        attack: 63,
        defense: 40,
        gold_reward: 208,
        ticket_reward: 16,
        recruitment_rate: 30,
        base_level: 20,
        glyph: "🧨",
        description: "A dragon whose breath turns savings to ash.",
    },
    MonsterTemplate {
        name: "Collapse Demon",
        max_hp: 240,
        max_mp: 85,
        attack: 60,
        defense: 38,
        gold_reward: 200,
        ticket_reward: 15,
        recruitment_rate: 50,
        base_level: 20,
        glyph: "💥",
        description: "A demon that brings whole economies to their knees.",
    },
    MonsterTemplate {
        name: "Market Overlord",
        max_hp: 255,
        max_mp: 95,
        attack: 65,
        defense: 42,
        gold_reward: 220,
        ticket_reward: 18,
        recruitment_rate: 10,
        base_level: 20,
        glyph: "👑",
        description: "The unseen hand behind every price on every board.",
    },
];

/// The full roster, tier by tier.
pub fn all_templates() -> Vec<MonsterTemplate> {
    TIER_NOVICE
        .into_iter()
        .chain(TIER_INTERMEDIATE)
        .chain(TIER_ADVANCED)
        .chain(TIER_ELITE)
        .collect()
}
