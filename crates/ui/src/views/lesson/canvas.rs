use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use serde::Serialize;

use physix_core::sim::{AnimationParameters, SceneKind};
use services::animation::ManualScheduler;
use services::{DriverHandle, FrameDriver, FrameRequest, FrameScheduler};

use super::scripts::FRAME_LOOP_SCRIPT;
use crate::vm::{StrokeVm, SvgNodeVm, map_frame, map_readouts};

/// Message sent to the frame loop script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub(super) enum FrameMessage {
    Request { id: u64 },
    Cancel { id: u64 },
    Close,
}

/// Schedules frames in the webview through a long-lived `eval` channel.
pub(super) struct EvalScheduler {
    eval: Eval,
    next_id: u64,
}

impl EvalScheduler {
    pub(super) fn new(eval: Eval) -> Self {
        Self { eval, next_id: 0 }
    }

    /// Waits for the next fired frame. `None` once the channel is gone.
    pub(super) async fn next_frame(&mut self) -> Option<FrameRequest> {
        match self.eval.recv::<u64>().await {
            Ok(id) => Some(FrameRequest::new(id)),
            Err(err) => {
                log::debug!("frame loop closed: {err:?}");
                None
            }
        }
    }

    fn post(&self, message: FrameMessage) {
        if let Err(err) = self.eval.send(message) {
            log::trace!("frame loop rejected {message:?}: {err:?}");
        }
    }
}

impl FrameScheduler for EvalScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        self.post(FrameMessage::Request { id: self.next_id });
        FrameRequest::new(self.next_id)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.post(FrameMessage::Cancel { id: request.id() });
    }
}

impl Drop for EvalScheduler {
    fn drop(&mut self) {
        self.post(FrameMessage::Close);
    }
}

/// One animated drawing. Remount it (new `key`) to restart its driver.
#[component]
pub(super) fn SceneCanvas(
    scene: SceneKind,
    params: Signal<AnimationParameters>,
    handles: Signal<Vec<(SceneKind, DriverHandle)>>,
) -> Element {
    let mut rendered =
        use_signal(|| FrameDriver::new(scene, ManualScheduler::new()).snapshot(&params.peek()));

    use_future(move || async move {
        let mut handles = handles;
        let mut driver = FrameDriver::new(scene, EvalScheduler::new(document::eval(FRAME_LOOP_SCRIPT)));
        handles.write().push((scene, driver.handle()));
        if let Err(err) = driver.start(move |frame| rendered.set(frame)) {
            log::warn!("could not start {scene:?}: {err}");
            return;
        }
        while driver.is_running() {
            let Some(request) = driver.scheduler_mut().next_frame().await else {
                break;
            };
            driver.fire(request, &params.peek());
        }
        driver.stop();
    });

    let current = rendered.read();
    let frame = map_frame(&current.frame);
    let readouts = map_readouts(&current.readouts);

    rsx! {
        figure { class: "scene",
            figcaption { class: "scene__title", "{scene.title()}" }
            svg {
                class: "scene__canvas",
                width: "{frame.width}",
                height: "{frame.height}",
                view_box: "{frame.view_box}",
                for (i, node) in frame.nodes.iter().enumerate() {
                    SvgNode { key: "{i}", node: node.clone() }
                }
            }
            if !readouts.is_empty() {
                dl { class: "scene__readouts",
                    for readout in readouts {
                        div { key: "{readout.label}", class: "scene__readout",
                            dt { "{readout.label}" }
                            dd { "{readout.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SvgNode(node: SvgNodeVm) -> Element {
    match node {
        SvgNodeVm::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => rsx! {
            line {
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
                stroke: "{stroke.color}",
                stroke_width: "{stroke.width}",
                stroke_dasharray: "{stroke.dash}",
            }
        },
        SvgNodeVm::Polyline { points, stroke } => rsx! {
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "{stroke.color}",
                stroke_width: "{stroke.width}",
                stroke_dasharray: "{stroke.dash}",
            }
        },
        SvgNodeVm::Polygon {
            points,
            fill,
            stroke,
        } => {
            let (color, width) = outline(stroke.as_ref());
            rsx! {
                polygon {
                    points: "{points}",
                    fill: "{fill}",
                    stroke: "{color}",
                    stroke_width: "{width}",
                }
            }
        }
        SvgNodeVm::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
        } => {
            let (color, width) = outline(stroke.as_ref());
            rsx! {
                circle {
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "{r}",
                    fill: "{fill}",
                    stroke: "{color}",
                    stroke_width: "{width}",
                }
            }
        }
        SvgNodeVm::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let (color, stroke_width) = outline(stroke.as_ref());
            rsx! {
                rect {
                    x: "{x}",
                    y: "{y}",
                    width: "{width}",
                    height: "{height}",
                    fill: "{fill}",
                    stroke: "{color}",
                    stroke_width: "{stroke_width}",
                }
            }
        }
        SvgNodeVm::Path { d, stroke } => rsx! {
            path {
                d: "{d}",
                fill: "none",
                stroke: "{stroke.color}",
                stroke_width: "{stroke.width}",
                stroke_dasharray: "{stroke.dash}",
            }
        },
        SvgNodeVm::Text {
            x,
            y,
            text: content,
            fill,
            size,
            anchor,
        } => rsx! {
            text {
                x: "{x}",
                y: "{y}",
                fill: "{fill}",
                font_size: "{size}",
                text_anchor: "{anchor}",
                "{content}"
            }
        },
    }
}

fn outline(stroke: Option<&StrokeVm>) -> (String, f64) {
    stroke.map_or_else(|| ("none".to_string(), 0.0), |s| (s.color.clone(), s.width))
}
