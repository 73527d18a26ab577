/// Bridges `requestAnimationFrame` to the frame driver.
///
/// Receives `{type: "request" | "cancel", id}` and `{type: "close"}` messages and
/// sends back the id of every frame that fires.
pub(super) const FRAME_LOOP_SCRIPT: &str = r#"
const frames = new Map();
while (true) {
    const msg = await dioxus.recv();
    if (!msg || msg.type === "close") {
        for (const handle of frames.values()) {
            cancelAnimationFrame(handle);
        }
        frames.clear();
        break;
    }
    if (msg.type === "request") {
        const id = msg.id;
        const handle = requestAnimationFrame(() => {
            frames.delete(id);
            dioxus.send(id);
        });
        frames.set(id, handle);
    } else if (msg.type === "cancel") {
        const handle = frames.get(msg.id);
        if (handle !== undefined) {
            cancelAnimationFrame(handle);
            frames.delete(msg.id);
        }
    }
}
"#;
