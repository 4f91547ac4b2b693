//! The item catalog: weapons, armors, and consumables.
//!
//! Prices are dual-currency: gold, or tickets whose gold value floats with
//! the economy condition.

use game_core::{ArmorDef, ConsumableDef, WeaponDef};

pub const WEAPONS: [WeaponDef; 6] = [
    WeaponDef {
        name: "Copper Abacus",
        attack_bonus: 3,
        price_gold: 50,
        price_tickets: 1,
        description: "A trainee trader's first weapon.",
    },
    WeaponDef {
        name: "Ledger Blade",
        attack_bonus: 5,
        price_gold: 100,
        price_tickets: 2,
        description: "Sharp enough to balance any book.",
    },
    WeaponDef {
        name: "Bull Market Saber",
        attack_bonus: 8,
        price_gold: 250,
        price_tickets: 5,
        description: "Swings hardest on the way up.",
    },
    WeaponDef {
        name: "Compound Lance",
        attack_bonus: 12,
        price_gold: 500,
        price_tickets: 9,
        description: "Its strikes accrue with every period.",
    },
    WeaponDef {
        name: "Golden Parachute Axe",
        attack_bonus: 18,
        price_gold: 1_000,
        price_tickets: 16,
        description: "Devastating on the way out.",
    },
    WeaponDef {
        name: "Invisible Hand",
        attack_bonus: 25,
        price_gold: 2_000,
        price_tickets: 30,
        description: "Guides every strike to its market-clearing price.",
    },
];

pub const ARMORS: [ArmorDef; 5] = [
    ArmorDef {
        name: "Paper Vest",
        defense_bonus: 2,
        price_gold: 40,
        price_tickets: 1,
        description: "Barely better than nothing. Barely.",
    },
    ArmorDef {
        name: "Hedge Mail",
        defense_bonus: 5,
        price_gold: 150,
        price_tickets: 3,
        description: "Covers the downside, mostly.",
    },
    ArmorDef {
        name: "Diversified Plate",
        defense_bonus: 8,
        price_gold: 350,
        price_tickets: 6,
        description: "No single blow can take it all.",
    },
    ArmorDef {
        name: "Insurance Cloak",
        defense_bonus: 12,
        price_gold: 700,
        price_tickets: 12,
        description: "Premiums paid in full, claims honored on impact.",
    },
    ArmorDef {
        name: "Sovereign Aegis",
        defense_bonus: 18,
        price_gold: 1_500,
        price_tickets: 24,
        description: "Backed by the full faith and credit of somewhere.",
    },
];

pub const CONSUMABLES: [ConsumableDef; 4] = [
    ConsumableDef {
        name: "Dividend Potion",
        hp_restore: 30,
        mp_restore: 0,
        price_gold: 20,
        price_tickets: 1,
        description: "A modest payout, restorative all the same.",
    },
    ConsumableDef {
        name: "Bond Coupon",
        hp_restore: 80,
        mp_restore: 0,
        price_gold: 50,
        price_tickets: 2,
        description: "Clip it and feel whole again.",
    },
    ConsumableDef {
        name: "Liquidity Tonic",
        hp_restore: 0,
        mp_restore: 10,
        price_gold: 30,
        price_tickets: 1,
        description: "Keeps the ideas flowing.",
    },
    ConsumableDef {
        name: "Windfall Elixir",
        hp_restore: 500,
        mp_restore: 100,
        price_gold: 200,
        price_tickets: 4,
        description: "A sudden fortune in a bottle. Restores everything.",
    },
];
