//! Geopolitical and macro events annotated on the price chart.

/// A dated market event shown as a vertical marker on the trend chart.
pub struct MarketEvent {
    /// ISO date, parsed lazily when plotting
    pub date: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Major events stay visible when the "show all events" toggle is off
    pub major: bool,
}

pub const MARKET_EVENTS: &[MarketEvent] = &[
    MarketEvent {
        date: "2011-03-15",
        name: "Arab Spring",
        description: "Uprisings across the Middle East and North Africa",
        major: true,
    },
    MarketEvent {
        date: "2014-11-27",
        name: "OPEC holds output",
        description: "OPEC keeps production steady despite falling prices",
        major: false,
    },
    MarketEvent {
        date: "2016-01-16",
        name: "Iran sanctions lifted",
        description: "End of sanctions on Iran raises global supply",
        major: false,
    },
    MarketEvent {
        date: "2016-11-30",
        name: "OPEC agreement",
        description: "First OPEC production cut agreed since 2008",
        major: false,
    },
    MarketEvent {
        date: "2019-12-06",
        name: "OPEC+ cuts",
        description: "OPEC+ deepens production cuts by 500,000 barrels/day",
        major: false,
    },
    MarketEvent {
        date: "2020-03-08",
        name: "Price war",
        description: "Saudi Arabia starts a price war after talks with Russia fail",
        major: true,
    },
    MarketEvent {
        date: "2020-03-11",
        name: "COVID-19 pandemic",
        description: "WHO declares a global pandemic",
        major: true,
    },
    MarketEvent {
        date: "2020-04-20",
        name: "Negative WTI",
        description: "WTI crude settles below zero for the first time",
        major: false,
    },
    MarketEvent {
        date: "2021-10-04",
        name: "Energy crunch",
        description: "Natural gas and coal shortages lift oil demand",
        major: false,
    },
    MarketEvent {
        date: "2022-02-24",
        name: "Invasion of Ukraine",
        description: "Russia invades Ukraine",
        major: true,
    },
    MarketEvent {
        date: "2022-03-31",
        name: "Reserve release",
        description: "US announces release of 180 million barrels from the SPR",
        major: false,
    },
    MarketEvent {
        date: "2023-04-02",
        name: "OPEC+ surprise cut",
        description: "OPEC+ announces a surprise cut of over 1 million barrels/day",
        major: false,
    },
    MarketEvent {
        date: "2023-10-07",
        name: "Israel-Hamas conflict",
        description: "Start of the conflict between Israel and Hamas",
        major: false,
    },
];
