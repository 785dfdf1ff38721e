//! Static portfolio page
//!
//! Every entry is rendered so the page can filter client-side; entries that do
//! not match the initial query start out `hidden`. The inline script re-applies
//! the same filter rules on input and keeps the rail and spotlight in sync with
//! scrolling.

use std::fmt::Write;

use crate::core::{Category, Query, Timeline, TimelineEntry, matches_query};
use crate::geometry::{DEFAULT_ACCENT, MIN_RAIL_HEIGHT, RECALC_PLAN, category_hex, recalc_script};
use crate::output::format::Labels;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PageOptions<'a> {
    pub(crate) title: &'a str,
    pub(crate) labels: Labels,
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn hidden_attr(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

fn write_styles(out: &mut String) {
    out.push_str("<style>\n");
    out.push_str(":root{--bg:#0f1117;--fg:#e6e6e6;--muted:#9aa0aa;--card:#171a23;");
    let _ = write!(out, "--accent:{DEFAULT_ACCENT};");
    for category in Category::ALL {
        let _ = write!(out, "--kind-{}:{};", category.as_str(), category_hex(category));
    }
    out.push_str("}\n");
    out.push_str(
        "body{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--fg)}\n\
         header{padding:2rem 1rem;max-width:760px;margin:0 auto}\n\
         .controls{display:flex;gap:.5rem;margin-top:1rem}\n\
         .controls input{flex:1}\n\
         .timeline{position:relative;max-width:760px;margin:0 auto;padding:0 1rem 4rem 3rem}\n\
         .timeline::before{content:'';position:absolute;left:var(--rail-left,24px);top:0;bottom:0;width:2px;background:#2a2f3a}\n\
         .timeline.no-rail::before{display:none}\n\
         .timeline.has-rail-progress::after{content:'';position:absolute;left:var(--rail-left);top:var(--rail-start);height:calc(var(--rail-end) - var(--rail-start));width:2px;background:var(--spot-strong,var(--accent))}\n\
         .spotlight{position:absolute;left:0;right:0;top:calc(var(--spot-y,0px) - 120px);height:240px;pointer-events:none;background:radial-gradient(closest-side,var(--spot-color,transparent),transparent)}\n\
         .entry{position:relative;background:var(--card);border-radius:12px;padding:1rem;margin:0 0 1rem}\n\
         .entry.active{outline:1px solid var(--spot-strong,var(--accent))}\n\
         .entry.highlight h3::after{content:' ★'}\n\
         .dot{position:absolute;left:-2rem;top:1.4rem;width:12px;height:12px;border-radius:50%;background:var(--accent)}\n\
         .meta{color:var(--muted);font-size:.9rem}\n\
         .tech{display:flex;flex-wrap:wrap;gap:.25rem;list-style:none;padding:0}\n\
         .tech li{font-size:.8rem;border:1px solid #2a2f3a;border-radius:999px;padding:0 .5rem}\n\
         :focus{outline:none}\n\
         .using-keyboard :focus{outline:2px solid var(--accent);outline-offset:2px}\n",
    );
    for category in Category::ALL {
        let _ = writeln!(
            out,
            ".entry[data-kind=\"{0}\"] .dot{{background:var(--kind-{0})}}",
            category.as_str()
        );
    }
    out.push_str("</style>\n");
}

fn write_controls(out: &mut String, query: &Query<'_>, labels: &Labels) {
    out.push_str("<div class=\"controls\">\n");
    let _ = writeln!(
        out,
        "<input id=\"search\" type=\"search\" placeholder=\"{}\" value=\"{}\">",
        escape_html(labels.search_placeholder),
        escape_html(query.search)
    );
    out.push_str("<select id=\"kind\">\n");
    let all_selected = if query.category.label() == "all" { " selected" } else { "" };
    let _ = writeln!(out, "<option value=\"all\"{all_selected}>{}</option>", labels.all);
    for category in Category::ALL {
        let selected = if query.category.label() == category.as_str() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            category.as_str(),
            labels.category(category)
        );
    }
    out.push_str("</select>\n</div>\n");
}

fn write_entry(out: &mut String, entry: &TimelineEntry, visible: bool, labels: &Labels) {
    let highlight = if entry.highlight { " highlight" } else { "" };
    let _ = writeln!(
        out,
        "<article class=\"entry{highlight}\" data-id=\"{}\" data-kind=\"{}\" data-search=\"{}\"{}>",
        escape_html(&entry.id),
        entry.category,
        escape_html(&entry.haystack()),
        hidden_attr(visible)
    );
    out.push_str("<span class=\"dot\"></span>\n");
    let _ = writeln!(out, "<h3>{}</h3>", escape_html(&entry.title));

    let mut meta = vec![labels.category(entry.category).to_string()];
    if let Some(org) = &entry.organization {
        meta.push(escape_html(org));
    }
    meta.push(escape_html(&entry.span(labels.now)));
    if let Some(location) = &entry.location {
        meta.push(escape_html(location));
    }
    let _ = writeln!(out, "<p class=\"meta\">{}</p>", meta.join(" · "));

    if let Some(description) = &entry.description {
        let _ = writeln!(out, "<p>{}</p>", escape_html(description));
    }
    if !entry.tech.is_empty() {
        out.push_str("<ul class=\"tech\">");
        for tag in &entry.tech {
            let _ = write!(out, "<li>{}</li>", escape_html(tag));
        }
        out.push_str("</ul>\n");
    }
    if !entry.links.is_empty() {
        out.push_str("<p class=\"links\">");
        for link in &entry.links {
            let rel = link.rel.as_deref().unwrap_or("noopener");
            let _ = write!(
                out,
                "<a href=\"{}\" rel=\"{}\" target=\"_blank\">{}</a> ",
                escape_html(&link.url),
                escape_html(rel),
                escape_html(&link.label)
            );
        }
        out.push_str("</p>\n");
    }
    out.push_str("</article>\n");
}

fn write_script(out: &mut String) {
    out.push_str("<script>\n(() => {\n");
    out.push_str("const COLORS = {");
    for category in Category::ALL {
        let _ = write!(out, "{}:'{}',", category.as_str(), category_hex(category));
    }
    let _ = writeln!(out, "}};\nconst ACCENT = '{DEFAULT_ACCENT}';");
    let _ = writeln!(out, "const MIN_RAIL = {MIN_RAIL_HEIGHT};");
    out.push_str(&recalc_script(&RECALC_PLAN));
    out.push_str(
        r#"const container = document.getElementById('timeline');
const search = document.getElementById('search');
const kind = document.getElementById('kind');
const empty = document.getElementById('empty');
let active = null;
const visible = () => Array.from(container.querySelectorAll('.entry:not([hidden])'));
function rgb(hex) {
  let h = hex.replace('#', '');
  if (h.length === 3) h = h.split('').map(c => c + c).join('');
  const n = parseInt(h, 16) || 0;
  return [(n >> 16) & 255, (n >> 8) & 255, n & 255];
}
function applyFilters() {
  const k = kind.value;
  const q = search.value.toLowerCase();
  let count = 0;
  for (const el of container.querySelectorAll('.entry')) {
    const ok = (k === 'all' || el.dataset.kind === k) && (!q || el.dataset.search.includes(q));
    el.hidden = !ok;
    if (ok) count++;
  }
  for (const g of container.querySelectorAll('.group')) {
    g.hidden = !g.querySelector('.entry:not([hidden])');
  }
  empty.hidden = count > 0;
  container.classList.toggle('no-rail', count === 0);
  scheduleRecalc(recalc);
}
function clearRail() {
  for (const p of ['--rail-start', '--rail-end', '--rail-left']) container.style.removeProperty(p);
  container.classList.remove('has-rail-progress');
}
function updateRail() {
  const els = visible().filter(el => el.offsetParent !== null);
  if (!els.length) { clearRail(); return; }
  const first = els[0].querySelector('.dot');
  const last = els[els.length - 1].querySelector('.dot');
  if (!first || !last) { clearRail(); return; }
  const c = container.getBoundingClientRect();
  const f = first.getBoundingClientRect();
  const l = last.getBoundingClientRect();
  const start = (f.top - c.top) + f.height / 2;
  const end = (l.top - c.top) + l.height / 2;
  const left = (f.left - c.left) + f.width / 2;
  const s = Math.max(0, Math.min(start, end));
  let e = Math.max(start, end);
  if (e - s < MIN_RAIL) e = s + MIN_RAIL;
  if (!isFinite(s) || !isFinite(e) || !isFinite(left)) { clearRail(); return; }
  container.style.setProperty('--rail-start', s + 'px');
  container.style.setProperty('--rail-end', e + 'px');
  container.style.setProperty('--rail-left', left + 'px');
  container.classList.add('has-rail-progress');
}
function updateSpotlight() {
  const c = container.getBoundingClientRect();
  const center = window.innerHeight / 2;
  container.style.setProperty('--spot-y', (center - c.top) + 'px');
  let best = null;
  for (const el of visible()) {
    const r = el.getBoundingClientRect();
    const dist = Math.abs((r.top + r.bottom) / 2 - center);
    if (!best || dist < best.dist) best = { el, dist };
  }
  if (!best) return;
  if (active && active !== best.el) active.classList.remove('active');
  active = best.el;
  active.classList.add('active');
  const [r, g, b] = rgb(COLORS[active.dataset.kind] || ACCENT);
  container.style.setProperty('--spot-color', `rgba(${r}, ${g}, ${b}, 0.18)`);
  container.style.setProperty('--spot-strong', `rgba(${r}, ${g}, ${b}, 0.35)`);
}
function recalc() { updateRail(); updateSpotlight(); }
search.addEventListener('input', applyFilters);
kind.addEventListener('change', applyFilters);
window.addEventListener('scroll', updateSpotlight, { passive: true });
window.addEventListener('resize', () => scheduleRecalc(recalc));
window.addEventListener('load', () => scheduleRecalc(recalc));
if ('MutationObserver' in window) {
  new MutationObserver(() => scheduleRecalc(recalc)).observe(container, { childList: true, subtree: true });
}
window.addEventListener('keydown', e => { if (e.key === 'Tab') document.documentElement.classList.add('using-keyboard'); });
window.addEventListener('mousedown', () => document.documentElement.classList.remove('using-keyboard'));
scheduleRecalc(recalc);
"#,
    );
    out.push_str("})();\n</script>\n");
}

/// Render the page.
///
/// `all` is the grouped timeline of the whole store; `query` decides which
/// entries start visible.
pub(crate) fn render_page(all: &Timeline<'_>, query: &Query<'_>, opts: PageOptions<'_>) -> String {
    let labels = opts.labels;
    let mut out = String::new();
    let mut visible_count = 0;

    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>", labels.lang);
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(opts.title));
    write_styles(&mut out);
    out.push_str("</head>\n<body>\n<header>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(opts.title));
    write_controls(&mut out, query, &labels);
    out.push_str("</header>\n<main>\n");

    let mut body = String::new();
    for group in &all.groups {
        let shown: Vec<bool> = group
            .entries
            .iter()
            .map(|e| matches_query(e, query))
            .collect();
        let any = shown.iter().any(|&v| v);
        let _ = writeln!(
            body,
            "<section class=\"group\"{}>\n<h2>{}</h2>",
            hidden_attr(any),
            escape_html(&labels.group(group.key))
        );
        for (entry, &visible) in group.entries.iter().zip(&shown) {
            if visible {
                visible_count += 1;
            }
            write_entry(&mut body, entry, visible, &labels);
        }
        body.push_str("</section>\n");
    }

    let rail_class = if visible_count == 0 { " no-rail" } else { "" };
    let _ = writeln!(out, "<div id=\"timeline\" class=\"timeline{rail_class}\">");
    out.push_str("<div class=\"spotlight\" aria-hidden=\"true\"></div>\n");
    out.push_str(&body);
    out.push_str("</div>\n");
    let _ = writeln!(
        out,
        "<p id=\"empty\" class=\"empty\"{}>{}</p>",
        hidden_attr(visible_count == 0),
        escape_html(labels.empty)
    );
    out.push_str("</main>\n");
    write_script(&mut out);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryFilter, derive, entry};

    fn sample() -> Vec<TimelineEntry> {
        let mut b = entry("B", Category::Project, "2025-03", Some("present"));
        b.title = "Workout <App>".into();
        b.tech = vec!["Angular 19".into()];
        let a = entry("A", Category::Job, "2021-11", Some("2025-02"));
        let c = entry("C", Category::Education, "2014-09", Some("2019-07"));
        vec![a, b, c]
    }

    fn opts() -> PageOptions<'static> {
        PageOptions {
            title: "Portfolio & CV",
            labels: Labels::default(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn renders_one_card_per_entry() {
        let entries = sample();
        let all = derive(&entries, &Query::default(), 2026);
        let page = render_page(&all, &Query::default(), opts());
        assert_eq!(page.matches("<article class=\"entry").count(), 3);
        assert!(page.contains("Workout &lt;App&gt;"));
        assert!(page.contains("<title>Portfolio &amp; CV</title>"));
        // only the empty-state paragraph starts hidden
        assert_eq!(page.matches(" hidden>").count(), 1);
        assert!(page.contains("id=\"empty\" class=\"empty\" hidden"));
    }

    #[test]
    fn initial_query_hides_non_matching_entries() {
        let entries = sample();
        let all = derive(&entries, &Query::default(), 2026);
        let query = Query {
            category: CategoryFilter::Only(Category::Job),
            search: "",
        };
        let page = render_page(&all, &query, opts());
        assert_eq!(page.matches(" hidden>").count(), 2 + 2);
        assert!(page.contains("<option value=\"job\" selected>"));
    }

    #[test]
    fn no_matches_shows_empty_message_and_hides_rail() {
        let entries = sample();
        let all = derive(&entries, &Query::default(), 2026);
        let query = Query {
            category: CategoryFilter::All,
            search: "cobol",
        };
        let page = render_page(&all, &query, opts());
        assert!(page.contains("class=\"timeline no-rail\""));
        assert!(page.contains("<p id=\"empty\" class=\"empty\">"));
        assert!(page.contains("value=\"cobol\""));
    }

    #[test]
    fn keyboard_focus_ring_has_a_style() {
        let entries = sample();
        let all = derive(&entries, &Query::default(), 2026);
        let page = render_page(&all, &Query::default(), opts());
        assert!(page.contains("classList.add('using-keyboard')"));
        assert!(page.contains(".using-keyboard :focus{outline:2px solid var(--accent)"));
    }

    #[test]
    fn script_carries_colour_table_and_schedule() {
        let entries = sample();
        let all = derive(&entries, &Query::default(), 2026);
        let page = render_page(&all, &Query::default(), opts());
        assert!(page.contains("project:'#a7f3d0'"));
        assert!(page.contains("const MIN_RAIL = 2;"));
        assert!(page.contains("function scheduleRecalc(run)"));
        assert!(page.contains("--kind-oss:#ddd6fe;"));
    }
}
