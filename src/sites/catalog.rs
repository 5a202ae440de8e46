// src/sites/catalog.rs
//! The static site catalog: one declarative descriptor per partner site.
//!
//! Anchors are CSS paths into each site's known markup; ids and section ids
//! are the fixed identifiers the downstream API expects per currency record.
//! Where the historical per-site code read one currency's element for both
//! records or reused an id across two records, the catalog carries one
//! documented anchor and one id per currency (Ванд, Интурист,
//! Гранд-Экспресс, ТурТрансВояж).

use super::{
    AnchorSpec, CurrencyAnchor, OperatorRow, RecordMeta, SiteDescriptor, SiteJob, Strategy,
    TableSpec,
};

const fn meta(id: u32, section_id: u32) -> RecordMeta {
    RecordMeta { id, section_id }
}

const fn anchor_site(
    name: &'static str,
    url: &'static str,
    operator: &'static str,
    guard: &'static str,
    guard_required: bool,
    eur: CurrencyAnchor,
    usd: CurrencyAnchor,
) -> SiteJob {
    SiteJob {
        name,
        url,
        descriptor: SiteDescriptor {
            operator,
            strategy: Strategy::Anchor(AnchorSpec {
                guard,
                guard_required,
                eur,
                usd,
            }),
        },
    }
}

/// Operators listed in the Tour-Kassa aggregate table.
const TOUR_KASSA_OPERATORS: &[OperatorRow] = &[
    OperatorRow {
        operator: "ЦБ РФ",
        eur: meta(3153, 539),
        usd: meta(3167, 539),
    },
    OperatorRow {
        operator: "Корал Трэвел",
        eur: meta(3141, 527),
        usd: meta(3155, 527),
    },
    OperatorRow {
        operator: "Санмар",
        eur: meta(3147, 531),
        usd: meta(3161, 531),
    },
    OperatorRow {
        operator: "Фан & Сан",
        eur: meta(3151, 535),
        usd: meta(3165, 535),
    },
    OperatorRow {
        operator: "Анекс Тур",
        eur: meta(3129, 521),
        usd: meta(3131, 521),
    },
    OperatorRow {
        operator: "Пегас Туристик",
        eur: meta(3143, 529),
        usd: meta(3157, 529),
    },
    OperatorRow {
        operator: "Русский Экспресс",
        eur: meta(3145, 537),
        usd: meta(3159, 537),
    },
    OperatorRow {
        operator: "Библио Глобус",
        eur: meta(3133, 523),
        usd: meta(3135, 523),
    },
];

/// The full job list, fixed per run.
pub static JOBS: &[SiteJob] = &[
    SiteJob {
        name: "Tour_Kassa",
        url: "https://tour-kassa.ru/%D0%BA%D1%83%D1%80%D1%81%D1%8B-%D0%B2%D0%B0%D0%BB%D1%8E%D1%82-%D1%82%D1%83%D1%80%D0%BE%D0%BF%D0%B5%D1%80%D0%B0%D1%82%D0%BE%D1%80%D0%BE%D0%B2",
        descriptor: SiteDescriptor {
            operator: "Tour_Kassa",
            strategy: Strategy::Table(TableSpec {
                table: "table.mod_rate_today",
                label_cell: "td.mod_rate_oper div",
                operators: TOUR_KASSA_OPERATORS,
            }),
        },
    },
    anchor_site(
        "ПАКС",
        "https://paks.ru/",
        "ПАКС",
        "div.page-header__currency",
        true,
        CurrencyAnchor::plain(
            "div.page-header__currency ul li:nth-child(2) span.page-header__currency-value",
            3727,
            563,
        ),
        CurrencyAnchor::plain(
            "div.page-header__currency ul li:nth-child(1) span.page-header__currency-value",
            3729,
            563,
        ),
    ),
    anchor_site(
        "ПАК",
        "https://www.pac.ru/",
        "ПАК",
        "div.mb-10.exchange-rates-block-items",
        true,
        CurrencyAnchor::plain(
            "div.mb-10.exchange-rates-block-items div:nth-child(2) div div.exchange-rates__currencies div:nth-child(1) span:nth-child(1)",
            3873,
            565,
        ),
        CurrencyAnchor::plain(
            "div.mb-10.exchange-rates-block-items div:nth-child(1) div div.exchange-rates__currencies div:nth-child(1) span:nth-child(1)",
            3875,
            565,
        ),
    ),
    anchor_site(
        "АртТур",
        "https://www.arttour.ru/",
        "Арт Тур",
        "#valuta-sl",
        false,
        CurrencyAnchor::plain("#cur_rates_eur", 3995, 571),
        CurrencyAnchor::plain("#cur_rates_usd", 3997, 571),
    ),
    anchor_site(
        "ICS",
        "https://www.icstrvl.ru/index.html",
        "ICS",
        "td.arriveCity",
        false,
        CurrencyAnchor::plain("table tbody tr td:nth-child(2) div b:nth-child(3)", 3991, 569),
        CurrencyAnchor::plain("table tbody tr td:nth-child(2) div b:nth-child(2)", 3993, 569),
    ),
    anchor_site(
        "Клик Вояж",
        "https://clickvoyage.ru/",
        "Клик Вояж",
        "body > header > div > div.row > div:nth-child(3) > div > table > tbody",
        false,
        CurrencyAnchor::plain("#EURid", 24381, 681),
        CurrencyAnchor::plain("#USDid", 24379, 681),
    ),
    anchor_site(
        "Ambotis",
        "https://webcache.googleusercontent.com/search?q=cache:https://www.ambotis.ru/turagentstvam/informatsiya/kurs-valyut/",
        "Амботис",
        "body > div:nth-child(2) > div.page > footer > div > div > div:nth-child(3) > div > div:nth-child(1)",
        false,
        CurrencyAnchor::plain("div > div > ul > li:nth-child(2) > span.currency__value", 3987, 567),
        CurrencyAnchor::plain("div > div > ul > li:nth-child(1) > span.currency__value", 3989, 567),
    ),
    anchor_site(
        "Jet Travel",
        "https://www.jettravel.ru/",
        "Джет Тревел",
        "div.b-currency__list",
        false,
        CurrencyAnchor::plain("span:nth-child(1) > span.b-currency__num", 19377, 677),
        CurrencyAnchor::plain("span:nth-child(2) > span.b-currency__num", 19375, 677),
    ),
    anchor_site(
        "Интурист",
        "https://intourist.ru/",
        "Интурист",
        "div.main-header-item.main-header-item--currency",
        false,
        CurrencyAnchor::plain(
            "div > div:nth-child(1) > div.main-header-item-popup-text.main-header-item-popup-text--3",
            3137,
            525,
        ),
        CurrencyAnchor::plain(
            "div > div:nth-child(1) > div.main-header-item-popup-text.main-header-item-popup-text--2",
            3139,
            525,
        ),
    ),
    // Rates for tomorrow appear in a second table row during the afternoon;
    // until then the today row is the documented fallback.
    anchor_site(
        "TEZ Tour",
        "https://www.tez-tour.com/",
        "Тез Тур",
        "#rates",
        false,
        CurrencyAnchor::with_fallback(
            "#rates > tbody > tr:nth-child(2) > td:nth-child(3)",
            "#rates > tbody > tr:nth-child(1) > td:nth-child(3)",
            3149,
            533,
        ),
        CurrencyAnchor::with_fallback(
            "#rates > tbody > tr:nth-child(2) > td:nth-child(2)",
            "#rates > tbody > tr:nth-child(1) > td:nth-child(2)",
            3163,
            533,
        ),
    ),
    anchor_site(
        "Grand Travels",
        "https://grand-travels.ru/",
        "Гранд-Экспресс",
        "body > table:nth-child(1) > tbody > tr:nth-child(1) > td:nth-child(2) > table > tbody > tr > td.p",
        false,
        CurrencyAnchor::plain("td.p span.pbl:nth-of-type(1)", 17613, 667),
        CurrencyAnchor::plain("td.p span.pbl:nth-of-type(2)", 17615, 667),
    ),
    anchor_site(
        "Loti",
        "https://www.loti.ru/Currency",
        "LOTi",
        "body > div > main > div.htmlContentDiv",
        false,
        CurrencyAnchor::plain(
            "body > div > main > div.htmlContentDiv > div:nth-child(5) > div > div:nth-child(3)",
            17561,
            665,
        ),
        CurrencyAnchor::plain(
            "body > div > main > div.htmlContentDiv > div:nth-child(7) > div > div:nth-child(3)",
            17563,
            665,
        ),
    ),
    anchor_site(
        "Пантеон",
        "https://www.panteon.ru/",
        "Пантеон",
        "div.b-courses.ajax-panel",
        false,
        CurrencyAnchor::plain(
            "div.b-courses.ajax-panel div div.b-courses__col.b-courses__col--3 span.b-courses__rub2",
            4197,
            589,
        ),
        CurrencyAnchor::plain(
            "div.b-courses.ajax-panel div div.b-courses__col.b-courses__col--2 span.b-courses__rub1",
            4199,
            589,
        ),
    ),
    anchor_site(
        "CruClub",
        "https://www.cruclub.ru/agent/howto/book/#pay",
        "Краски Мира",
        "div.p_col.s1.last",
        false,
        CurrencyAnchor::plain(
            "div:nth-child(1) > div.body.small.dlist > div:nth-child(2) > span",
            4029,
            587,
        ),
        CurrencyAnchor::plain(
            "div:nth-child(1) > div.body.small.dlist > div:nth-child(1) > span",
            4031,
            587,
        ),
    ),
    anchor_site(
        "Спектрум",
        "https://spectrum.ru/turagentam/",
        "Спектрум",
        "body > main > header > div > div.d-flex.align-items-center.order-lg-4.d-none.d-lg-flex",
        false,
        CurrencyAnchor::plain("div:nth-child(2) > div", 4025, 585),
        CurrencyAnchor::plain("div:nth-child(1) > div", 4027, 585),
    ),
    anchor_site(
        "Туртранс",
        "https://www.tourtrans.ru/",
        "ТурТрансВояж",
        "div.currency",
        false,
        CurrencyAnchor::plain("div.currency ul li.inf:nth-of-type(2) span", 4021, 583),
        CurrencyAnchor::plain("div.currency ul li.inf:nth-of-type(1) span", 4023, 583),
    ),
    anchor_site(
        "BSI",
        "https://www.bsigroup.ru/",
        "BSI",
        "div.fright-col",
        false,
        CurrencyAnchor::plain("div.col__left-30 div div div.cur-drop div:nth-child(2)", 4017, 581),
        CurrencyAnchor::plain("div.col__left-30 div div div.cur-drop div:nth-child(1)", 4019, 581),
    ),
    anchor_site(
        "Квинта",
        "https://www.quinta.ru/",
        "Квинта",
        "div.main-container",
        false,
        CurrencyAnchor::plain(
            "header div div:nth-child(1) div:nth-child(3) div.courses div:nth-child(2)",
            4013,
            579,
        ),
        CurrencyAnchor::plain(
            "header div div:nth-child(1) div:nth-child(3) div.courses div:nth-child(3)",
            4015,
            579,
        ),
    ),
    anchor_site(
        "Амиго Турс",
        "https://www.amigo-tours.ru/",
        "Амиго Турс",
        "div.exchRates__cont.header__top__item",
        false,
        CurrencyAnchor::plain("div:nth-child(1) > span.curr_rate", 4009, 577),
        CurrencyAnchor::plain("div:nth-child(2) > span.curr_rate", 4011, 577),
    ),
    anchor_site(
        "Ванд",
        "https://vand.ru/",
        "Ванд",
        "#wrapper > header > div > div.header__course.d-none.d-lg-block",
        false,
        CurrencyAnchor::plain("div > span:nth-child(4) > span", 4005, 575),
        CurrencyAnchor::plain("div > span:nth-child(3) > span", 4007, 575),
    ),
    anchor_site(
        "Space Travel",
        "https://www.space-travel.ru/",
        "Space",
        "#header > div > div.new-head > div.vall-st",
        false,
        CurrencyAnchor::plain("p:nth-child(3) > span.eur", 3999, 573),
        CurrencyAnchor::plain("p:nth-child(2) > span.usd", 4001, 573),
    ),
];
