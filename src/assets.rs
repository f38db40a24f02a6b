//! The compiled-in tech atlas slot list.
//!
//! Order is significant: the slot at index `i` sits at `y = i * tile` in the sheet.

/// Slot names, top to bottom.
pub const TECH_ASSETS: &[&str] = &[
    // ENGINES
    "eng-quick-jump-5",
    "eng-long-hump-6",
    "eng-daddy-long-legs-7",
    "eng-alpha-drive-8",
    "eng-sub-galactic-fuel-scoop",
    "eng-trans-galactic-drive",
    "eng-trans-galactic-fuel-scoop",
    "eng-radiating-hydro-ram-scoop",
    "eng-settlers-delight",
    "eng-fuel-mizer",
    "eng-trans-galactic-super-scoop",
    "eng-trans-galactic-mizer-scoop",
    "eng-interspace-10",
    "eng-trans-star-10",
    "eng-sub-galaxy-scoop",
    // STARGATES
    "gate-std",
    "gate-weight",
    "gate-distance",
    "gate-any",
    // MASS DRIVERS
    "driver-std",
    "driver-super",
    "driver-ultra",
    // BEAM WEAPONS
    "weap-laser",
    "weap-xray",
    "weap-minigun",
    "weap-yakimora",
    "weap-disruptor",
    "weap-phazer-bazooka",
    "weap-gatling",
    "weap-big-mutha",
    "weap-bludgeon",
    "weap-blackjack",
    "weap-pulsed-sapper",
    "weap-colloidal-phaser",
    "weap-mini-blaster",
    "weap-mark-iv-blaster",
    "weap-phased-sapper",
    "weap-heavy-blaster",
    "weap-gatling-neutrino",
    "weap-myopic-disrupter",
    "weap-mega-disrupter",
    "weap-streaming-pulverizer",
    "weap-anti-matter-pulverizer",
    "weap-syncro-sapper",
    // TORPEDOES & MISSILES
    "weap-torp-alpha",
    "weap-torp-beta",
    "weap-torp-delta",
    "weap-torp-epsilon",
    "weap-torp-rho",
    "weap-torp-upsilon",
    "weap-torp-omega",
    "weap-torp-anti",
    "weap-missile-jihad",
    "weap-missile-juggernaut",
    "weap-missile-doomsday",
    "weap-missile-armageddon",
    // BOMBS
    "weap-bomb-lady",
    "weap-bomb-black-cat",
    "weap-bomb-m70",
    "weap-bomb-m80",
    "weap-bomb-cherry",
    "weap-bomb-lbu17",
    "weap-bomb-lbu32",
    "weap-bomb-lbu74",
    "weap-bomb-retro",
    "weap-bomb-smart",
    "weap-bomb-neutron",
    "weap-bomb-enriched-neutron",
    "weap-bomb-peerless",
    "weap-bomb-annihilator",
    // SHIELDS
    "def-shield-mole",
    "def-shield-cow",
    "def-shield-wolf",
    "def-shield-croby",
    "def-shield-shadow",
    "def-shield-bear",
    "def-shield-gorilla",
    "def-shield-elephant",
    "def-shield-phase",
    "def-shield-langston",
    // ARMOR
    "def-armor-tri",
    "def-armor-crob",
    "def-armor-neu",
    "def-armor-val",
    // COMPUTERS
    "elec-comp-bat",
    "elec-comp-cyber",
    "elec-comp-nexus",
    // ELECTRICAL
    "elec-jammer-10",
    "elec-jammer-20",
    "elec-jammer-50",
    "elec-cloak-stealth",
    "elec-cloak-super",
    "elec-capacitor",
    // MECHANICAL
    "mech-fuel-tank",
    "mech-super-tank",
    "mech-colony-mod",
    "mech-maneuver-jet",
    "mech-overthruster",
    "mech-robo-miner",
    "mech-auto-miner",
    // SCANNERS
    "scan-viewer",
    "scan-rhino",
    "scan-mole",
    "scan-possum",
    "scan-snooper",
    "scan-eagle",
    "scan-peerless",
    // CARGO
    "icon-cargo-small",
    "icon-cargo-med",
    "icon-cargo-large",
    // ORBITAL
    "orb-dock",
    "orb-sensor",
    "orb-shield",
    // HULLS
    "hull-freight-s",
    "hull-freight-m",
    "hull-freight-l",
    "hull-freight-super",
    "hull-scout",
    "hull-frigate",
    "hull-destroyer",
    "hull-cruiser",
    "hull-battle-cruiser",
    "hull-battleship",
    "hull-dreadnought",
    "hull-privateer",
    "hull-rogue",
    "hull-galleon",
    "hull-nubian",
    "hull-meta-morph",
    "hull-mini-colony",
    "hull-colony",
    "hull-mini-bomber",
    "hull-b17",
    "hull-stealth-bomber",
    "hull-b52",
    "hull-midget-miner",
    "hull-mini-miner",
    "hull-miner",
    "hull-maxi-miner",
    "hull-ultra-miner",
    "hull-fuel-transport",
    "hull-super-fuel-export",
    "hull-mini-mine-layer",
    "hull-super-mine-layer",
    "hull-orbital-fort",
    "hull-space-dock",
    "hull-space-station",
    "hull-ultra-station",
    "hull-death-star",
];
