//! Rendering of the dashboard page from its template.

use std::time::Duration;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;
use crate::format::PLACEHOLDER;
use crate::html::HtmlDashboard;
use crate::html::SCRIPT_FILE_NAME;
use crate::html::charts::HtmlCharts;
use crate::html::layout::Widget;
use crate::html::layout::WidgetKind;
use crate::html::output::OutputStream;
use crate::html::view::HtmlView;
use crate::view::DateInput;

const INDEX_TEMPLATE: &str = include_str!("./index.html.tt");

/// Something that renders itself into an [OutputStream].
pub trait Render {
    /// Renders into `output`.
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}

/// The page of a dashboard, as it stands after the last render.
pub struct DashboardPage<'a> {
    view: &'a HtmlView,
    charts: &'a HtmlCharts,
    refresh_every: Option<Duration>,
}

impl<'a> DashboardPage<'a> {
    /// Captures the widgets and live charts of a dashboard.
    pub fn new(dashboard: &'a HtmlDashboard) -> DashboardPage<'a> {
        Self {
            view: dashboard.view(),
            charts: dashboard.charts().backend(),
            refresh_every: None,
        }
    }

    /// Makes the browser reload the page periodically.
    pub fn refresh_every(mut self, interval: Duration) -> DashboardPage<'a> {
        self.refresh_every = Some(interval);
        self
    }

    fn context(&self) -> Result<PageContext<'a>> {
        let layout = self.view.layout();

        let sections: Vec<SectionContext<'a>> = layout
            .sections
            .iter()
            .map(|section| SectionContext {
                title: section.title,
                widgets: section
                    .widgets
                    .iter()
                    .map(|widget| self.widget(widget))
                    .collect(),
            })
            .collect();

        let scripts: Vec<ScriptContext> = self
            .charts
            .scripts()
            .map(|(id, config)| {
                Ok(ScriptContext {
                    id: id.as_str().to_owned(),
                    config: script_json(config)?,
                })
            })
            .collect::<Result<_>>()?;

        Ok(PageContext {
            title: layout.title,
            script_file: SCRIPT_FILE_NAME,
            refresh: self.refresh_every.is_some(),
            refresh_seconds: self.refresh_every.map_or(0, |interval| interval.as_secs().max(1)),
            sections,
            scripts,
        })
    }

    fn widget(&self, widget: &Widget) -> WidgetContext<'a> {
        let view = self.view;

        WidgetContext {
            id: widget.id.as_str().to_owned(),
            title: widget.title,
            is_text: widget.kind == WidgetKind::Text,
            is_canvas: widget.kind == WidgetKind::Canvas,
            is_list: widget.kind == WidgetKind::List,
            is_date_range: widget.kind == WidgetKind::DateRange,
            text: view.text(&widget.id).unwrap_or(PLACEHOLDER),
            entries: view
                .list(&widget.id)
                .unwrap_or_default()
                .iter()
                .map(|entry| EntryContext {
                    text: &entry.text,
                    href: entry.href.as_deref().unwrap_or_default(),
                    is_link: entry.href.is_some(),
                })
                .collect(),
            inputs: view.inputs(&widget.id).unwrap_or_default(),
        }
    }
}

impl Render for DashboardPage<'_> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let mut template = TinyTemplate::new();
        template.add_template("index", INDEX_TEMPLATE)?;

        let context = self.context()?;
        let text = template.render("index", &context)?;

        output.write(&text)
    }
}

// The configuration is inlined into a script element, where "</script>"
// inside a string would end the element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'static str,
    script_file: &'static str,
    refresh: bool,
    refresh_seconds: u64,
    sections: Vec<SectionContext<'a>>,
    scripts: Vec<ScriptContext>,
}

#[derive(Serialize)]
struct SectionContext<'a> {
    title: &'static str,
    widgets: Vec<WidgetContext<'a>>,
}

#[derive(Serialize)]
struct WidgetContext<'a> {
    id: String,
    title: &'static str,
    is_text: bool,
    is_canvas: bool,
    is_list: bool,
    is_date_range: bool,
    text: &'a str,
    entries: Vec<EntryContext<'a>>,
    inputs: &'a [DateInput],
}

#[derive(Serialize)]
struct EntryContext<'a> {
    text: &'a str,
    href: &'a str,
    is_link: bool,
}

#[derive(Serialize)]
struct ScriptContext {
    id: String,
    config: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ids;
    use crate::html;
    use crate::html::layout::PageLayout;
    use crate::payload::DashboardPayload;
    use crate::payload::ResearchItem;
    use crate::range::Range;
    use crate::range::Selection;
    use crate::sample;

    fn render(dashboard: &HtmlDashboard) -> String {
        let mut output = String::new();
        DashboardPage::new(dashboard).render(&mut output).unwrap();
        output
    }

    #[test]
    fn page_has_one_script_per_live_chart() {
        let mut dashboard = html::dashboard(PageLayout::dashboard());
        dashboard.render(&sample::payload());
        dashboard.render(&sample::payload());

        let page = render(&dashboard);

        assert_eq!(page.matches("renderChart(\"").count(), ids::CHARTS.len());
        assert!(page.contains(r#"<canvas id="avgPcbChart""#));
        assert!(page.contains("\"type\":\"polarArea\""));
    }

    #[test]
    fn text_is_escaped() {
        let mut dashboard = html::dashboard(PageLayout::dashboard());
        let payload = DashboardPayload {
            research: Some(vec![ResearchItem {
                title: Some(String::from("<b>PCB</b> & cord blood")),
                year: None,
                authors: None,
                link: Some(String::from("https://example.org/?a=1&b=2")),
            }]),
            ..Default::default()
        };

        dashboard.render(&payload);
        let page = render(&dashboard);

        assert!(page.contains("&lt;b&gt;PCB&lt;/b&gt; &amp; cord blood"));
        assert!(!page.contains("<b>PCB</b>"));
        assert!(page.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn inlined_configs_cannot_close_the_script() {
        let mut dashboard = html::dashboard(PageLayout::dashboard());
        let mut payload = sample::payload();
        if let Some(levels) = payload.avg_pcb_levels.as_mut() {
            levels.labels[0] = String::from("</script><script>alert(1)");
        }

        dashboard.render(&payload);
        let page = render(&dashboard);

        assert!(!page.contains("</script><script>alert(1)"));
        assert!(page.contains("\\u003c/script>\\u003cscript>alert(1)"));
    }

    #[test]
    fn unset_text_shows_the_placeholder() {
        let mut dashboard = html::dashboard(PageLayout::sample());
        dashboard.show_selection(Selection::Custom);

        let page = render(&dashboard);

        assert!(page.contains(r#"id="avg_fetal_pcb">-<"#));
        assert!(page.contains(r#"type="date" name="start""#));
        assert!(!page.contains("http-equiv"));
    }

    #[test]
    fn refresh_interval_is_written() {
        let mut dashboard = html::dashboard(PageLayout::dashboard());
        dashboard.load(&sample::SampleSource, Range::All);

        let mut output = String::new();
        DashboardPage::new(&dashboard)
            .refresh_every(Duration::from_secs(30))
            .render(&mut output)
            .unwrap();

        assert!(output.contains(r#"<meta http-equiv="refresh" content="30">"#));
    }
}
