use serde::{Deserialize, Serialize};

const DEFAULT_HINTS: &[&str] = &[
    "steam",
    "steampowered",
    "steamstatic",
    "epicgames",
    "fortnite",
    "riot",
    "valorant",
    "leagueoflegends",
    "lol",
    "playstation",
    "psn",
    "xbox",
    "battle.net",
    "blizzard",
    "ea.com",
    "origin.com",
    "ubisoft",
    "uplay",
    "activision",
    "callofduty",
    "cod",
    "rockstargames",
    "pubgmobile",
    "pubg",
    "gpubgm",
    "igamecj",
    "clashroyale",
    "supercell",
    "minecraft",
    "mojang",
    "roblox",
    "discord",
    "twitch",
    "akamaihd",
    "akamaized",
    "cloudfront",
    "edgesuite",
];

const DEFAULT_WARM_DOMAINS: &[&str] = &[
    "store.steampowered.com",
    "steamcommunity.com",
    "cdn.cloudflare.steamstatic.com",
    "epicgames.com",
    "cdn1.epicgames.com",
    "valorant.com",
    "leagueoflegends.com",
    "riotgames.com",
    "playstation.com",
    "direct.playstation.com",
    "xbox.com",
    "xboxlive.com",
    "battle.net",
    "blizzard.com",
    "cdn.club.gpubgm.com",
    "grpc.club.gpubgm.com",
    "pubgmobile.com",
    "game.clashroyaleapp.com",
    "api.clashroyale.com",
    "clashroyale.com",
    "minecraft.net",
    "mojang.com",
    "roblox.com",
    "discord.com",
    "discordapp.com",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GamingConfig {
    /// Substrings that mark a query name as latency-sensitive.
    #[serde(default = "default_hints")]
    pub hints: Vec<String>,

    /// Names resolved by the cache-warming job.
    #[serde(default = "default_warm_domains")]
    pub warm_domains: Vec<String>,
}

impl Default for GamingConfig {
    fn default() -> Self {
        Self {
            hints: default_hints(),
            warm_domains: default_warm_domains(),
        }
    }
}

fn default_hints() -> Vec<String> {
    DEFAULT_HINTS.iter().map(|s| s.to_string()).collect()
}

fn default_warm_domains() -> Vec<String> {
    DEFAULT_WARM_DOMAINS.iter().map(|s| s.to_string()).collect()
}
