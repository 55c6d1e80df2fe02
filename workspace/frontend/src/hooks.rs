use std::cell::{Ref, RefCell};
use std::rc::Rc;

use common::{Command, StationApp, UiEvent};
use yew::prelude::*;

use crate::api_client::{analysis, stations};
use crate::components::analysis::chart;

/// Shared handle on the page controller.
///
/// Events go through [`StationAppHandle::dispatch`], which updates the
/// controller, schedules a re-render and runs the returned commands. Network
/// results are fed back as events once their futures complete.
#[derive(Clone)]
pub struct StationAppHandle {
    app: Rc<RefCell<StationApp>>,
    update: UseForceUpdateHandle,
}

impl StationAppHandle {
    pub fn state(&self) -> Ref<'_, StationApp> {
        self.app.borrow()
    }

    pub fn dispatch(&self, event: UiEvent) {
        let commands = self.app.borrow_mut().dispatch(event);
        self.update.force_update();
        for command in commands {
            self.execute(command);
        }
    }

    pub fn callback(&self) -> Callback<UiEvent> {
        let handle = self.clone();
        Callback::from(move |event| handle.dispatch(event))
    }

    fn execute(&self, command: Command) {
        log::trace!("Executing {:?}", command);
        match command {
            Command::LoadStations => {
                let handle = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = stations::fetch_stations().await;
                    handle.dispatch(UiEvent::StationsLoaded(result));
                });
            }
            Command::FetchAnalysis { request, station } => {
                let handle = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = analysis::fetch_analysis(&station).await;
                    handle.dispatch(UiEvent::AnalysisLoaded { request, result });
                });
            }
            Command::DisposeChart(chart_handle) => chart::dispose(chart_handle),
        }
    }
}

/// Owns the page controller for the lifetime of the component and loads the
/// station list on mount.
#[hook]
pub fn use_station_app() -> StationAppHandle {
    let app = use_mut_ref(StationApp::new);
    let update = use_force_update();
    let handle = StationAppHandle { app, update };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            handle.dispatch(UiEvent::Started);
            || ()
        });
    }

    handle
}
