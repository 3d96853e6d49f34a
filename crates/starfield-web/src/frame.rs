use crate::render;
use instant::Instant;
use starfield_core::{Camera, FrameDriver, LineInstance, StarInstance, StarfieldConfig, TickSource};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type PendingHandle = Rc<Cell<Option<i32>>>;

/// `requestAnimationFrame`-backed tick source. `pending` holds the handle
/// of the outstanding callback so cancellation and double-arming guards
/// work exactly once.
pub struct RafTicker {
    tick: TickClosure,
    pending: PendingHandle,
}

impl RafTicker {
    pub fn new() -> Self {
        Self {
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Shared handles for `start_loop`, which installs the tick closure and
    /// clears `pending` when a callback fires.
    pub fn handles(&self) -> (TickClosure, PendingHandle) {
        (self.tick.clone(), self.pending.clone())
    }
}

impl TickSource for RafTicker {
    fn arm(&mut self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            self.pending.set(Some(id));
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

pub struct FrameContext {
    pub driver: FrameDriver<RafTicker>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    line_scratch: Vec<LineInstance>,
    star_scratch: Vec<StarInstance>,
}

impl FrameContext {
    pub fn new(
        driver: FrameDriver<RafTicker>,
        gpu: Option<render::GpuState<'static>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let line_cap = driver.field.config.line_count;
        let star_cap = driver.field.config.star_count;
        Self {
            driver,
            gpu,
            canvas,
            last_instant: Instant::now(),
            line_scratch: Vec::with_capacity(line_cap),
            star_scratch: Vec::with_capacity(star_cap),
        }
    }

    /// One display frame: advance the driver, pack instances, draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if !self.driver.on_tick(dt_sec) {
            return;
        }
        let field = &self.driver.field;
        field.write_line_instances(&mut self.line_scratch);
        field.write_star_instances(&mut self.star_scratch);

        if let Some(gpu) = &mut self.gpu {
            let width = self.canvas.width();
            let height = self.canvas.height();
            gpu.resize_if_needed(width, height);
            let aspect = width as f32 / height.max(1) as f32;
            let camera = Camera::backdrop(aspect, field.camera_offset());
            if let Err(e) = gpu.render(&camera, &self.line_scratch, &self.star_scratch) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Idempotent teardown: cancel scheduling, then drop the GPU state,
    /// which releases buffers, pipelines and the surface.
    pub fn dispose(&mut self) {
        self.driver.dispose();
        self.gpu = None;
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &StarfieldConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {e}");
            None
        }
    }
}

/// Install the tick closure and arm the first frame.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>, tick: TickClosure, pending: PendingHandle) {
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // The armed callback has fired; clear its handle before the driver
        // decides whether to arm the next one.
        pending.set(None);
        ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    ctx.borrow_mut().driver.start();
}
