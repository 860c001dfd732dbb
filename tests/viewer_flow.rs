use skyss_tickets::{
    ActivityHost, Disposition, Intent, MotionAction, MotionEvent, RenderRequest, SharedAngle,
    StatusView, TagError, TicketActivity, TouchController, UltralightTransport, ViewSize,
};

/// A tag that answers one fixed block and counts closes
struct FakeTag {
    block: Result<Vec<u8>, ()>,
    closes: usize,
    connected: bool,
}

impl FakeTag {
    fn answering(block: &[u8]) -> Self {
        Self {
            block: Ok(block.to_vec()),
            closes: 0,
            connected: false,
        }
    }

    fn removed() -> Self {
        Self {
            block: Err(()),
            closes: 0,
            connected: false,
        }
    }
}

impl UltralightTransport for FakeTag {
    fn connect(&mut self) -> Result<(), TagError> {
        self.connected = true;
        Ok(())
    }

    fn read_pages(&mut self, _page: u8) -> Result<Vec<u8>, TagError> {
        self.block.clone().map_err(|_| TagError::TagLost)
    }

    fn close(&mut self) -> Result<(), TagError> {
        self.closes += 1;
        self.connected = false;
        Ok(())
    }
}

#[derive(Default)]
struct Screen {
    lines: Vec<String>,
    finished: bool,
}

impl StatusView for Screen {
    fn set_text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

impl ActivityHost for Screen {
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[derive(Default)]
struct DirtyFlag {
    requests: usize,
}

impl RenderRequest for DirtyFlag {
    fn request_render(&mut self) {
        self.requests += 1;
    }
}

#[test]
fn tag_discoveries_are_independent() {
    let activity = TicketActivity::default();
    let mut screen = Screen::default();

    let mut good = FakeTag::answering(&[
        0x04, 0x5A, 0x3B, 0xED, 0x12, 0xC4, 0x80, 0x81, 0xD7, 0x48, 0x00, 0x00, 0xFF, 0xFF, 0xFF,
        0xFC,
    ]);
    let mut gone = FakeTag::removed();

    assert_eq!(
        activity.resolve_intent(Intent::TagDiscovered(&mut good), &mut screen),
        Disposition::Shown
    );
    assert_eq!(
        activity.resolve_intent(Intent::TagDiscovered(&mut gone), &mut screen),
        Disposition::Shown
    );

    assert_eq!(
        screen.lines,
        vec![
            "Tag discovered! Tag header 045a3bed12c48081d7480000fffffffc".to_string(),
            "Tag discovered! Failed to fetch data!".to_string(),
        ]
    );
    assert_eq!(good.closes, 1);
    assert_eq!(gone.closes, 1);
    assert!(!good.connected && !gone.connected);
    assert!(!screen.finished);
}

#[test]
fn unknown_intent_finishes_screen() {
    let mut screen = Screen::default();
    let intent: Intent<FakeTag> = Intent::Other("Intent { act=android.intent.action.VIEW }".into());

    let disposition = TicketActivity::default().resolve_intent(intent, &mut screen);

    assert_eq!(disposition, Disposition::Finished);
    assert!(screen.finished);
    assert!(screen.lines.is_empty());
}

#[test]
fn drag_rotates_shared_angle() {
    let angle = SharedAngle::default();
    let render_side = angle.clone();
    let mut touch = TouchController::new(angle);
    let mut dirty = DirtyFlag::default();
    let view = ViewSize {
        width: 320,
        height: 480,
    };

    let events = [
        MotionEvent::new(MotionAction::Down, 200.0, 100.0),
        MotionEvent::new(MotionAction::Move, 232.0, 100.0),
        MotionEvent::new(MotionAction::Move, 264.0, 100.0),
        MotionEvent::new(MotionAction::Up, 264.0, 100.0),
    ];
    for event in events {
        assert!(touch.on_touch_event(event, view, &mut dirty));
    }

    assert_eq!(dirty.requests, 2);
    assert_eq!(render_side.get(), 36.0);
}
