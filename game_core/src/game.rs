use hecs::{Entity, World};
use tracing::info;

use crate::{
    ai_input, create_ball, create_paddle, find_paddles, handle_key, step, winner, Ball,
    ConfigError, Events, GameConfig, GameRng, PaddleInput, Player, Side, Table, Time,
};

/// A whole game session: world, table and the resources `step` needs
pub struct Game {
    pub world: World,
    pub time: Time,
    pub table: Table,
    pub config: GameConfig,
    pub events: Events,
    pub rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = Table::new(&config.table)?;
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, &config.left, &table)?;
        let right = create_paddle(&mut world, &config.right, &table)?;
        let ball = create_ball(&mut world, &config.ball, &table, &mut rng)?;

        info!(
            width = table.size().x,
            height = table.size().y,
            seed,
            "game created"
        );

        Ok(Self {
            world,
            time: Time::default(),
            table,
            config,
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// Advance one frame by `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.table,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        handle_key(&mut self.world, key, pressed)
    }

    pub fn set_input(&mut self, side: Side, input: PaddleInput) {
        if let Ok(mut player) = self.world.get::<&mut Player>(self.paddle_entity(side)) {
            player.input = input;
        }
    }

    /// Let the built-in opponent drive `side` for the next frame
    pub fn drive_with_ai(&mut self, side: Side) {
        let input = ai_input(&self.world, side);
        self.set_input(side, input);
    }

    /// Start a new round: paddles back on their baselines, scores cleared, new serve
    pub fn restart(&mut self) {
        for (_entity, player) in self.world.query_mut::<&mut Player>() {
            player.initialize();
        }
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.initialize(&self.table, &mut self.rng);
        }
        self.events.clear();
        info!("game restarted");
    }

    pub fn player(&self, side: Side) -> Option<Player> {
        find_paddles(&self.world).map(|(left, right)| match side {
            Side::Left => left,
            Side::Right => right,
        })
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn winner(&self) -> Option<Side> {
        winner(&self.world, self.config.win_score)
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
