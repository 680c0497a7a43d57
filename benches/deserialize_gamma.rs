/// Benchmarks for Gamma API response deserialization.
///
/// Markets dominate real payloads: they carry JSON-encoded outcome lists and arrive nested
/// inside events, so both shapes are measured at a few sizes.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use polymarket_gamma_sdk::types::response::{Event, Market, SportsMetadata, Tag};

const MARKET: &str = r#"{
    "id": "517310",
    "question": "Will Barron attend Georgetown?",
    "conditionId": "0x0000000000000000000000000000000000000000000000000000000000000001",
    "slug": "will-barron-attend-georgetown",
    "description": "This market resolves to Yes if Barron Trump enrolls at Georgetown.",
    "startDate": "2024-05-01T12:00:00Z",
    "endDate": "2024-09-01T12:00:00Z",
    "image": "https://polymarket-upload.s3.us-east-2.amazonaws.com/barron.png",
    "icon": "https://polymarket-upload.s3.us-east-2.amazonaws.com/barron.png",
    "outcomes": "[\"Yes\", \"No\"]",
    "outcomePrices": "[\"0.035\", \"0.965\"]",
    "clobTokenIds": "[\"71321045679252212594626385532706912750332728571942532289631379312455583992563\", \"52114319501245915516055106046884209969926127482827954674443846427813813222426\"]",
    "active": true,
    "closed": false,
    "archived": false,
    "acceptingOrders": true,
    "enableOrderBook": true,
    "liquidity": "12345.67",
    "liquidityNum": 12345.67,
    "volume": "987654.32",
    "volumeNum": 987654.32,
    "volume24hr": 1234.5,
    "orderPriceMinTickSize": 0.001,
    "orderMinSize": 5,
    "lastTradePrice": 0.035,
    "bestBid": 0.034,
    "bestAsk": 0.036,
    "spread": 0.002,
    "negRisk": false,
    "createdAt": "2024-04-30T09:15:00Z",
    "updatedAt": "2024-08-30T18:45:00Z"
}"#;

fn event_json(markets: usize) -> String {
    let markets = vec![MARKET; markets].join(",");
    format!(
        r#"{{
            "id": "903193",
            "ticker": "barron-college",
            "slug": "where-will-barron-go-to-college",
            "title": "Where will Barron go to college?",
            "startDate": "2024-05-01T12:00:00Z",
            "endDate": "2024-09-01T12:00:00Z",
            "active": true,
            "closed": false,
            "liquidity": "50000.00",
            "volume": "2500000.00",
            "commentCount": 42,
            "negRisk": true,
            "markets": [{markets}],
            "tags": [
                {{"id": "2", "label": "Politics", "slug": "politics"}},
                {{"id": 100639, "label": "Trump", "slug": "trump"}}
            ]
        }}"#
    )
}

fn bench_markets(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma/markets");

    group.throughput(Throughput::Bytes(MARKET.len() as u64));
    group.bench_function("Market", |b| {
        b.iter(|| {
            let _: Market = serde_json::from_str(std::hint::black_box(MARKET))
                .expect("Deserialization should succeed");
        });
    });

    for count in [10, 100] {
        let list = format!("[{}]", vec![MARKET; count].join(","));
        group.throughput(Throughput::Bytes(list.len() as u64));
        group.bench_with_input(BenchmarkId::new("Vec<Market>", count), &list, |b, json| {
            b.iter(|| {
                let _: Vec<Market> = serde_json::from_str(std::hint::black_box(json))
                    .expect("Deserialization should succeed");
            });
        });
    }

    let market: Market = serde_json::from_str(MARKET).expect("Deserialization should succeed");
    group.bench_function("Market::outcome_set", |b| {
        b.iter(|| std::hint::black_box(&market).outcome_set());
    });

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma/events");

    for count in [1, 10, 50] {
        let json = event_json(count);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("Event", count), &json, |b, json| {
            b.iter(|| {
                let _: Event = serde_json::from_str(std::hint::black_box(json))
                    .expect("Deserialization should succeed");
            });
        });
    }

    group.finish();
}

fn bench_reference_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma/reference");

    let tag = r#"{
        "id": "2",
        "label": "Politics",
        "slug": "politics",
        "forceShow": true,
        "isCarousel": false,
        "createdAt": "2023-10-25T18:55:50.681Z",
        "updatedAt": "2024-08-21T11:44:02.161Z"
    }"#;
    group.bench_function("Tag", |b| {
        b.iter(|| {
            let _: Tag = serde_json::from_str(std::hint::black_box(tag))
                .expect("Deserialization should succeed");
        });
    });

    let sport = r#"{
        "id": 1,
        "sport": "nba",
        "image": "https://polymarket-upload.s3.us-east-2.amazonaws.com/nba.png",
        "resolution": "https://www.nba.com/",
        "ordering": "home",
        "tags": "1,745,100639",
        "series": "10345",
        "createdAt": "2024-10-01T00:00:00Z"
    }"#;
    group.bench_function("SportsMetadata", |b| {
        b.iter(|| {
            let _: SportsMetadata = serde_json::from_str(std::hint::black_box(sport))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

criterion_group!(
    gamma_benches,
    bench_markets,
    bench_events,
    bench_reference_data
);
criterion_main!(gamma_benches);
