use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cipin::{aggregate, extract, segment, word_frequencies, ExtractMode, StopwordSet};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Small page: a few Chinese paragraphs plus nav anchors with titles.
const SMALL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>测试</title></head>
<body>
<nav><a href="/" title="首页导航">首页</a> <a href="/news" title="新闻中心">新闻</a></nav>
<h1>北京报道</h1>
<p>北京的秋天非常美丽，天安门广场的游客很多，大家都喜欢在广场上拍照留念。</p>
<p>今年秋天的旅游人数比去年增加了很多，旅游行业对此非常满意。</p>
</body>
</html>"#;

/// Page with `n` paragraphs of repetitive Chinese article text.
fn article_html(n: usize) -> String {
    let mut s = String::from("<!DOCTYPE html><html><head><title>长文</title></head><body>\n");
    for i in 0..n {
        s.push_str(&format!(
            "<p>第{}段介绍北京的历史文化，北京是中国的首都，天安门广场位于市中心，\
             每年吸引大量游客前来参观，游客对历史文化表现出浓厚的兴趣。</p>\n",
            i + 1
        ));
    }
    s.push_str("</body></html>");
    s
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Extraction alone, both modes, at two page sizes.
fn bench_extraction(c: &mut Criterion) {
    let inputs: &[(&str, String)] = &[
        ("small", SMALL_HTML.to_string()),
        ("medium", article_html(20)),
        ("large", article_html(100)),
    ];

    let mut group = c.benchmark_group("extraction");
    for (id, html) in inputs {
        group.bench_with_input(BenchmarkId::new("paragraphs", id), html, |b, html| {
            b.iter(|| extract(black_box(html), ExtractMode::Paragraphs))
        });
        group.bench_with_input(BenchmarkId::new("anchor_titles", id), html, |b, html| {
            b.iter(|| extract(black_box(html), ExtractMode::AnchorTitles))
        });
    }
    group.finish();
}

/// Segmentation + filtering at three text sizes.
fn bench_segmentation(c: &mut Criterion) {
    let stop = StopwordSet::builtin();
    let inputs: &[(&str, String)] = &[
        ("small", extract(SMALL_HTML, ExtractMode::Paragraphs)),
        ("medium", extract(&article_html(20), ExtractMode::Paragraphs)),
        ("large", extract(&article_html(100), ExtractMode::Paragraphs)),
    ];

    let mut group = c.benchmark_group("segmentation");
    for (id, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(id), text, |b, text| {
            b.iter(|| segment(black_box(text), black_box(stop)).count())
        });
    }
    group.finish();
}

/// Aggregation over a pre-segmented token stream, and the combined
/// segment + aggregate path.
fn bench_aggregation(c: &mut Criterion) {
    let stop = StopwordSet::builtin();
    let text = extract(&article_html(100), ExtractMode::Paragraphs);
    let tokens: Vec<&str> = segment(&text, stop).collect();

    let mut group = c.benchmark_group("aggregation");
    group.bench_function("aggregate_only", |b| {
        b.iter(|| aggregate(black_box(tokens.iter().copied())))
    });
    group.bench_function("segment_and_aggregate", |b| {
        b.iter(|| word_frequencies(black_box(&text), black_box(stop)))
    });
    group.finish();
}

criterion_group!(benches, bench_extraction, bench_segmentation, bench_aggregation);
criterion_main!(benches);
