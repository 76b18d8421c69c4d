// src/nav/stack.rs  —  Back-stack with push / replace / pop / lateral jump
use super::route::Route;

/// Identity of one mounted frame; a popped-to frame keeps its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameKey(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub key:   FrameKey,
    pub route: Route,
}

/// Never empty: the bottom frame cannot be popped.
#[derive(Debug)]
pub struct NavStack {
    frames:   Vec<Frame>,
    next_key: u64,
}

impl NavStack {
    pub fn new(initial: Route) -> Self {
        let mut s = Self { frames: Vec::new(), next_key: 0 };
        let f = s.frame(initial);
        s.frames.push(f);
        s
    }

    pub fn top(&self) -> &Frame {
        // frames is never empty
        &self.frames[self.frames.len() - 1]
    }

    pub fn depth(&self) -> usize { self.frames.len() }
    pub fn frames(&self) -> &[Frame] { &self.frames }
    pub fn can_pop(&self) -> bool { self.frames.len() > 1 }

    /// Add a back-navigable frame
    pub fn push(&mut self, route: Route) {
        let f = self.frame(route);
        self.frames.push(f);
    }

    /// Swap the top frame for a new one; the old frame leaves the history
    pub fn replace(&mut self, route: Route) {
        let f = self.frame(route);
        let last = self.frames.len() - 1;
        self.frames[last] = f;
    }

    /// Drop the top frame and return it; refuses to empty the stack
    pub fn pop(&mut self) -> Option<Frame> {
        if self.can_pop() { self.frames.pop() } else { None }
    }

    /// Lateral navigation to a named route.
    /// An existing frame with that name becomes the top (frames above it are
    /// discarded, params updated); otherwise a new frame is appended.
    pub fn jump(&mut self, route: Route) {
        match self.frames.iter().rposition(|f| f.route.name() == route.name()) {
            Some(i) => {
                self.frames.truncate(i + 1);
                self.frames[i].route = route;
            }
            None => self.push(route),
        }
    }

    fn frame(&mut self, route: Route) -> Frame {
        let key = FrameKey(self.next_key);
        self.next_key += 1;
        Frame { key, route }
    }
}
