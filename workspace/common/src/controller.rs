//! State machine behind the station search page.
//!
//! [`StationApp`] owns every piece of mutable page state. Each UI event
//! updates it and returns the [`Command`]s the host must run: network
//! requests and chart disposal. Results come back as further events, so the
//! whole flow can be driven from tests without a document or a network.

use crate::autocomplete::SuggestionPanel;
use crate::chart::{AnalysisChart, ChartHandle};
use crate::error::{ApiError, AppError};
use crate::stations::StationRepository;
use crate::table::AnalysisTable;
use crate::{AnalysisRow, Station};
use tracing::{debug, error, info, warn};

/// DOM id of the station search input.
pub const STATION_INPUT_ID: &str = "stationInput";

/// Sequence number of an analysis request. Only the latest one is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Where a document-wide click landed, relative to the search widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Panel,
    Elsewhere,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadStations,
    FetchAnalysis { request: RequestId, station: Station },
    DisposeChart(ChartHandle),
}

/// A successfully loaded analysis, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub station: Station,
    pub rows: Vec<AnalysisRow>,
    pub chart: ChartHandle,
}

impl AnalysisReport {
    pub fn table(&self) -> AnalysisTable {
        AnalysisTable::new(&self.station, &self.rows)
    }

    pub fn chart_data(&self) -> AnalysisChart {
        AnalysisChart::from_rows(&self.rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisView {
    #[default]
    Idle,
    Loading { station: Station },
    Ready(AnalysisReport),
    Failed { station: Station },
}

impl AnalysisView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// User interactions with the page.
pub trait UiEvents {
    fn on_input_changed(&mut self, text: &str) -> Vec<Command>;
    fn on_input_clicked(&mut self) -> Vec<Command>;
    fn on_document_clicked(&mut self, target: ClickTarget) -> Vec<Command>;
    fn on_suggestion_selected(&mut self, station: &Station) -> Vec<Command>;
    fn on_analyze_clicked(&mut self) -> Vec<Command>;
}

/// Everything that can happen to the page, user-driven or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Started,
    StationsLoaded(Result<Vec<Station>, ApiError>),
    InputChanged(String),
    InputClicked,
    DocumentClicked(ClickTarget),
    SuggestionSelected(Station),
    AnalyzeClicked,
    AnalysisLoaded {
        request: RequestId,
        result: Result<Vec<AnalysisRow>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationApp {
    stations: StationRepository,
    input: String,
    panel: Option<SuggestionPanel>,
    view: AnalysisView,
    error: Option<AppError>,
    last_request: u64,
    chart: Option<ChartHandle>,
    chart_generation: u64,
}

impl StationApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller whose station list is already loaded.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        Self {
            stations: StationRepository::with_stations(stations),
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Command> {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::Started => self.on_started(),
            UiEvent::StationsLoaded(result) => self.on_stations_loaded(result),
            UiEvent::InputChanged(text) => self.on_input_changed(&text),
            UiEvent::InputClicked => self.on_input_clicked(),
            UiEvent::DocumentClicked(target) => self.on_document_clicked(target),
            UiEvent::SuggestionSelected(station) => self.on_suggestion_selected(&station),
            UiEvent::AnalyzeClicked => self.on_analyze_clicked(),
            UiEvent::AnalysisLoaded { request, result } => self.on_analysis_loaded(request, result),
        }
    }

    pub fn on_started(&mut self) -> Vec<Command> {
        vec![Command::LoadStations]
    }

    pub fn on_stations_loaded(&mut self, result: Result<Vec<Station>, ApiError>) -> Vec<Command> {
        if let Err(err) = self.stations.load(result) {
            error!("Station list unavailable: {}", err);
            self.error = Some(AppError::StationListUnavailable(err));
        }
        Vec::new()
    }

    pub fn on_analysis_loaded(
        &mut self,
        request: RequestId,
        result: Result<Vec<AnalysisRow>, ApiError>,
    ) -> Vec<Command> {
        if request.value() != self.last_request {
            debug!(
                "Ignoring stale analysis response {} (latest is {})",
                request.value(),
                self.last_request
            );
            return Vec::new();
        }

        let station = match &self.view {
            AnalysisView::Loading { station } => station.clone(),
            other => {
                warn!("Analysis response {} arrived in state {:?}", request.value(), other);
                return Vec::new();
            }
        };

        let commands = self.dispose_chart();
        match result {
            Ok(rows) => {
                info!("Rendering {} analysis rows for {}", rows.len(), station);
                self.chart_generation += 1;
                let chart = ChartHandle::new(self.chart_generation);
                self.chart = Some(chart);
                self.view = AnalysisView::Ready(AnalysisReport { station, rows, chart });
            }
            Err(source) => {
                error!("Analysis for {} failed: {}", station, source);
                self.view = AnalysisView::Failed {
                    station: station.clone(),
                };
                self.error = Some(AppError::AnalysisUnavailable { station, source });
            }
        }
        commands
    }

    /// Replaces any open panel with a fresh one filtered by `text`.
    pub fn show_suggestions(&mut self, text: &str) {
        self.close_all(ClickTarget::Elsewhere);
        if !self.stations.is_ready() {
            return;
        }
        let panel = SuggestionPanel::build(STATION_INPUT_ID, self.stations.stations(), text);
        debug!("Showing {} suggestions for {:?}", panel.suggestions().len(), text);
        self.panel = Some(panel);
    }

    /// Closes the open panel unless the click landed on the input or inside
    /// the panel itself.
    pub fn close_all(&mut self, except: ClickTarget) {
        match except {
            ClickTarget::Input | ClickTarget::Panel => {}
            ClickTarget::Elsewhere => self.panel = None,
        }
    }

    fn start_analysis(&mut self) -> Vec<Command> {
        if self.input.is_empty() {
            return Vec::new();
        }
        let station = Station::new(self.input.clone());
        self.last_request += 1;
        let request = RequestId(self.last_request);
        info!("Requesting analysis {} for {}", request.value(), station);

        let mut commands = self.dispose_chart();
        self.view = AnalysisView::Loading {
            station: station.clone(),
        };
        self.error = None;
        commands.push(Command::FetchAnalysis { request, station });
        commands
    }

    fn dispose_chart(&mut self) -> Vec<Command> {
        self.chart.take().map(Command::DisposeChart).into_iter().collect()
    }

    pub fn stations(&self) -> &StationRepository {
        &self.stations
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> Option<&SuggestionPanel> {
        self.panel.as_ref()
    }

    pub fn view(&self) -> &AnalysisView {
        &self.view
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn chart(&self) -> Option<ChartHandle> {
        self.chart
    }
}

impl UiEvents for StationApp {
    fn on_input_changed(&mut self, text: &str) -> Vec<Command> {
        self.input = text.to_string();
        self.show_suggestions(text);
        Vec::new()
    }

    fn on_input_clicked(&mut self) -> Vec<Command> {
        if self.panel.is_none() {
            self.show_suggestions("");
        }
        Vec::new()
    }

    fn on_document_clicked(&mut self, target: ClickTarget) -> Vec<Command> {
        self.close_all(target);
        Vec::new()
    }

    fn on_suggestion_selected(&mut self, station: &Station) -> Vec<Command> {
        self.input = station.name().to_string();
        self.close_all(ClickTarget::Elsewhere);
        self.start_analysis()
    }

    fn on_analyze_clicked(&mut self) -> Vec<Command> {
        self.start_analysis()
    }
}
