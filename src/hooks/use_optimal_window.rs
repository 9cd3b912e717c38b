use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::charging::{ChargeDuration, OptimalWindow};
use crate::models::error::AppError;
use crate::services::api::{DashboardClient, EnergyApi};

/// Optimizer panel state. Independent of the forecast: a failure here never affects the
/// charts.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OptimalWindowState {
    window: Option<Rc<OptimalWindow>>,
    error: Option<String>,
    pending: bool,
    /// Sequence number of the most recently issued request; 0 before the first one
    latest_request: u64,
    requested: Option<ChargeDuration>,
}

pub enum OptimalWindowAction {
    Requested {
        seq: u64,
        duration: ChargeDuration,
    },
    Resolved {
        seq: u64,
        result: Result<OptimalWindow, AppError>,
    },
}

impl OptimalWindowState {
    /// Last successfully computed window, kept across later failures
    pub fn window(&self) -> Option<&Rc<OptimalWindow>> {
        self.window.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub const fn requested_duration(&self) -> Option<ChargeDuration> {
        self.requested
    }

    /// Whether a response tagged `seq` may still be applied.
    pub const fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_request
    }
}

impl Reducible for OptimalWindowState {
    type Action = OptimalWindowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // A new request hides the previous failure notice but keeps the last window
            OptimalWindowAction::Requested { seq, duration } => Rc::new(Self {
                error: None,
                pending: true,
                latest_request: seq,
                requested: Some(duration),
                ..(*self).clone()
            }),
            // Superseded by a newer request
            OptimalWindowAction::Resolved { seq, .. } if !self.is_current(seq) => self,
            OptimalWindowAction::Resolved { result, .. } => match result {
                Ok(window) => Rc::new(Self {
                    window: Some(Rc::new(window)),
                    error: None,
                    pending: false,
                    ..(*self).clone()
                }),
                Err(_) => Rc::new(Self {
                    error: Some(Config::OPTIMAL_WINDOW_ERROR_MESSAGE.to_string()),
                    pending: false,
                    ..(*self).clone()
                }),
            },
        }
    }
}

/// Issues one optimal window request and wraps the outcome for the reducer.
pub async fn recompute_window<A: EnergyApi>(
    api: &A,
    seq: u64,
    duration: ChargeDuration,
) -> OptimalWindowAction {
    OptimalWindowAction::Resolved {
        seq,
        result: api.fetch_optimal_window(duration).await,
    }
}

/// Handle returned by `use_optimal_window` hook
#[derive(Clone, PartialEq)]
pub struct OptimalWindowHandle {
    pub state: OptimalWindowState,
    pub recompute: Callback<ChargeDuration>,
}

/// Owns the optimal window lifecycle: one request with the default duration on mount,
/// then one per `recompute`. Only the newest request's response is ever applied.
#[hook]
pub fn use_optimal_window(client: Rc<DashboardClient>) -> OptimalWindowHandle {
    let state = use_reducer(OptimalWindowState::default);
    let issued = use_mut_ref(|| 0u64);
    let mounted = use_mut_ref(|| true);

    let recompute = {
        let dispatcher = state.dispatcher();
        let issued = issued.clone();
        let mounted = mounted.clone();

        Callback::from(move |duration: ChargeDuration| {
            let seq = {
                let mut issued = issued.borrow_mut();
                *issued += 1;
                *issued
            };
            dispatcher.dispatch(OptimalWindowAction::Requested { seq, duration });

            let client = client.clone();
            let dispatcher = dispatcher.clone();
            let issued = issued.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let action = recompute_window(client.as_ref(), seq, duration).await;

                if !*mounted.borrow() {
                    return;
                }
                if *issued.borrow() != seq {
                    gloo::console::debug!(format!("Discarding stale optimal window #{seq}"));
                    return;
                }
                if let OptimalWindowAction::Resolved { result: Err(e), .. } = &action {
                    gloo::console::error!(format!(
                        "Error calculating optimal window for {duration}: {e}"
                    ));
                }
                dispatcher.dispatch(action);
            });
        })
    };

    {
        let recompute = recompute.clone();

        use_effect_with((), move |_| {
            recompute.emit(ChargeDuration::default());

            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    OptimalWindowHandle {
        state: (*state).clone(),
        recompute,
    }
}
