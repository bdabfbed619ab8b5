//! The sections and widgets of a dashboard page.

use crate::binding::ids;
use crate::binding::summary::METRICS;
use crate::id::ElementId;
use crate::range::CUSTOM_RANGE;
use crate::range::RANGE_PREVIEW;

/// What an element of the page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// A text field.
    Text,
    /// A chart canvas.
    Canvas,
    /// A list of entries.
    List,
    /// A container of date inputs.
    DateRange,
}

/// An element of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub(crate) id: ElementId,
    pub(crate) title: &'static str,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    /// Creates a widget.
    pub fn new(id: ElementId, title: &'static str, kind: WidgetKind) -> Widget {
        Self { id, title, kind }
    }
}

/// A titled group of widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(crate) title: &'static str,
    pub(crate) widgets: Vec<Widget>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(title: &'static str) -> Section {
        Self {
            title,
            widgets: Vec::new(),
        }
    }

    /// Appends a widget.
    pub fn add(mut self, widget: Widget) -> Section {
        self.widgets.push(widget);
        self
    }

    fn canvas(self, id: ElementId, title: &'static str) -> Section {
        self.add(Widget::new(id, title, WidgetKind::Canvas))
    }
}

/// The structure of a dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub(crate) title: &'static str,
    pub(crate) sections: Vec<Section>,
}

impl PageLayout {
    /// Creates a page without sections.
    pub fn new(title: &'static str) -> PageLayout {
        Self {
            title,
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    pub fn add(mut self, section: Section) -> PageLayout {
        self.sections.push(section);
        self
    }

    /// Removes a widget from the page.
    pub fn without(mut self, id: &ElementId) -> PageLayout {
        for section in &mut self.sections {
            section.widgets.retain(|widget| widget.id != *id);
        }
        self
    }

    /// The page of the fetch-driven dashboard.
    pub fn dashboard() -> PageLayout {
        let overview = Section::new("Overview")
            .add(Widget::new(RANGE_PREVIEW, "Range", WidgetKind::Text));

        Self::with_charts(overview)
    }

    /// The page of the static sample dashboard.
    pub fn sample() -> PageLayout {
        let overview = Section::new("Overview")
            .add(Widget::new(CUSTOM_RANGE, "Custom range", WidgetKind::DateRange));

        Self::with_charts(overview)
    }

    /// Looks a widget up by identifier.
    pub fn widget(&self, id: &ElementId) -> Option<&Widget> {
        self.sections
            .iter()
            .flat_map(|section| &section.widgets)
            .find(|widget| widget.id == *id)
    }

    fn with_charts(overview: Section) -> PageLayout {
        let overview = METRICS.iter().fold(overview, |section, &(name, _)| {
            section.add(Widget::new(ElementId::new(name), metric_title(name), WidgetKind::Text))
        });

        PageLayout::new("PCB Exposure Analytics")
            .add(overview)
            .add(
                Section::new("Exposure and risk patterns")
                    .canvas(ids::AVG_PCB, "Average PCB levels")
                    .canvas(ids::RISK_DISTRIBUTION, "Risk distribution by PCB")
                    .canvas(ids::CONCENTRATION, "Maternal vs fetal concentration"),
            )
            .add(
                Section::new("Demographic correlations")
                    .canvas(ids::AGE_GROUPS, "PCB by maternal age")
                    .canvas(ids::AGE_SCATTER, "Total fetal PCB vs age")
                    .canvas(ids::BMI, "PCB by BMI")
                    .canvas(ids::SMOKING, "Smokers vs non-smokers")
                    .canvas(ids::CORRELATION_HEATMAP, "Correlation heatmap"),
            )
            .add(
                Section::new("Environment and lifestyle")
                    .canvas(ids::EXPOSURE, "Exposure contribution")
                    .canvas(ids::DIET, "Dietary patterns")
                    .canvas(ids::LIFESTYLE, "Lifestyle clusters"),
            )
            .add(Section::new("Related research").add(Widget::new(
                ids::RESEARCH,
                "Studies",
                WidgetKind::List,
            )))
    }
}

fn metric_title(name: &str) -> &'static str {
    match name {
        "total_patients" => "Patients assessed",
        "high_risk" => "High risk",
        "top_pcb" => "Top PCB",
        "top_pcb_avg" => "Top PCB average",
        "avg_fetal_pcb" => "Average fetal PCB",
        "correlation" => "Maternal-fetal correlation",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_has_every_chart() {
        let layout = PageLayout::dashboard();

        for id in ids::CHARTS {
            let widget = layout.widget(&id).unwrap();
            assert_eq!(widget.kind, WidgetKind::Canvas);
        }
        assert_eq!(layout.widget(&RANGE_PREVIEW).unwrap().kind, WidgetKind::Text);
        assert!(layout.widget(&CUSTOM_RANGE).is_none());
    }

    #[test]
    fn sample_has_the_custom_range() {
        let layout = PageLayout::sample();

        assert_eq!(
            layout.widget(&CUSTOM_RANGE).unwrap().kind,
            WidgetKind::DateRange
        );
        assert!(layout.widget(&RANGE_PREVIEW).is_none());
    }

    #[test]
    fn without_removes_a_widget() {
        let layout = PageLayout::dashboard().without(&ids::DIET);

        assert!(layout.widget(&ids::DIET).is_none());
        assert!(layout.widget(&ids::EXPOSURE).is_some());
    }
}
