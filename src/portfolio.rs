use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    /// Stable slot assigned at creation; image loads report back with it.
    pub slot: usize,
    pub group_index: usize,
    pub index_in_group: usize,
    pub scroll_position: f64,
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    items: Vec<PortfolioItem>,
    next_index: usize,
    countdown: f64,
}

impl Portfolio {
    pub fn new(group_sizes: &[usize], config: &GameConfig) -> Self {
        let mut items = Vec::new();
        for (group_index, &size) in group_sizes.iter().enumerate() {
            for index_in_group in 0..size {
                items.push(PortfolioItem {
                    slot: items.len(),
                    group_index,
                    index_in_group,
                    scroll_position: 0.0,
                    width: config.banner_width,
                    height: config.banner_placeholder_height,
                    aspect_ratio: 1.0,
                    active: false,
                });
            }
        }

        Self {
            items,
            next_index: 0,
            countdown: config.banner_initial_delay,
        }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn countdown(&self) -> f64 {
        self.countdown
    }

    /// Applies an image's natural size to its slot. Width stays fixed; height
    /// follows the aspect ratio. Unknown slots and degenerate sizes are
    /// ignored.
    pub fn set_natural_size(&mut self, slot: usize, natural_width: f64, natural_height: f64) -> bool {
        if natural_width <= 0.0 || natural_height <= 0.0 {
            return false;
        }
        let Some(item) = self.items.get_mut(slot) else {
            return false;
        };
        item.aspect_ratio = natural_width / natural_height;
        item.height = item.width / item.aspect_ratio;
        true
    }

    pub fn update(&mut self, game_speed: f64, config: &GameConfig) {
        self.advance_active(game_speed, config);
        self.activate_next(game_speed, config);
    }

    fn advance_active(&mut self, game_speed: f64, config: &GameConfig) {
        let last = self.items.len().saturating_sub(1);
        let all_activated = self.next_index >= self.items.len();
        let mut cycle_finished = false;

        for (index, item) in self.items.iter_mut().enumerate() {
            if !item.active {
                continue;
            }
            item.scroll_position += game_speed * config.banner_speed_factor;
            if item.scroll_position > config.canvas_width + item.width + config.banner_exit_buffer {
                item.active = false;
                if index == last && all_activated {
                    cycle_finished = true;
                }
            }
        }

        if cycle_finished {
            self.restart_cycle(config);
        }
    }

    fn restart_cycle(&mut self, config: &GameConfig) {
        for item in &mut self.items {
            item.active = false;
            item.scroll_position = 0.0;
        }
        self.next_index = 0;
        self.countdown = config.banner_initial_delay;
    }

    fn required_spacing(&self, index: usize, config: &GameConfig) -> f64 {
        match index.checked_sub(1).map(|prev| &self.items[prev]) {
            Some(prev) if prev.group_index != self.items[index].group_index => {
                config.banner_group_spacing
            }
            _ => config.banner_spacing,
        }
    }

    fn activate_next(&mut self, game_speed: f64, config: &GameConfig) {
        if self.countdown > 0.0 || self.next_index >= self.items.len() {
            self.countdown -= 1.0;
            return;
        }

        let index = self.next_index;
        let spacing = self.required_spacing(index, config);
        let ready = match index.checked_sub(1) {
            None => true,
            Some(prev) => {
                let prev = &self.items[prev];
                prev.active && prev.scroll_position > spacing
            }
        };
        if !ready {
            return;
        }

        let group_index = self.items[index].group_index;
        let item = &mut self.items[index];
        item.active = true;
        item.scroll_position = config.banner_entry_offset;
        self.next_index += 1;

        self.countdown = match self.items.get(self.next_index) {
            Some(next) if next.group_index != group_index => {
                config.banner_group_spacing / game_speed
            }
            Some(_) => config.banner_spacing / game_speed,
            None => config.banner_group_spacing * 2.0 / game_speed,
        };
    }

    pub fn reset(&mut self, config: &GameConfig) {
        for item in &mut self.items {
            item.active = false;
            item.scroll_position = 0.0;
        }
        self.next_index = 0;
        self.countdown = config.banner_initial_delay;
    }
}
