//! Encounter session: one player, a room of enemies and the turn loop between them.
//!
//! Every player command returns the display lines it produced. A command that
//! passes time (`attack`, `wait`) ends with a turn tick: the search window counts
//! down, then status effects run on the living player and then on every living enemy.
//! `search` and `look` are free.

use game_content::{Catalog, ContentFactory};
use game_core::combat::{Party, effect_lines};
use game_core::engine;
use game_core::{
    AttackRequest, CombatResolver, Combatant, EnemyActor, GameConfig, InitiativeRoll,
    NoProgression, PcgRng, PlayerActor, RngSource, SearchBonus, WeaponTrait,
    effective_perception, is_detectable, roll_initiative, visible_targets,
};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::progression::{LevelUp, SkillProgression};

pub const NOTHING_TO_FIGHT: &str = "There is nothing to fight.";
pub const ROOM_QUIET: &str = "🧘 The room is quiet...";
pub const PLAYER_SLAIN: &str = "💀 You have been slain!";
pub const PLAYER_DIED: &str = "💀 You have died.";
pub const SEARCH_STARTED: &str =
    "🔍 You carefully examine your surroundings. Perception increased temporarily.";
pub const WAITED: &str = "⏳ You bide your time.";

/// A running encounter.
///
/// `R` drives every combat roll. Progression keeps its own generator.
pub struct Session<R = PcgRng> {
    config: GameConfig,
    player: PlayerActor,
    enemies: Vec<EnemyActor>,
    /// Enemy indices in retaliation order.
    enemy_order: Vec<usize>,
    initiative: Vec<InitiativeRoll>,
    search: SearchBonus,
    turn: u64,
    rng: R,
    progression: SkillProgression,
}

impl Session<PcgRng> {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<R: RngSource> Session<R> {
    /// Enemies retaliate in list order until [`Session::begin`] rolls initiative.
    pub fn new(
        config: GameConfig,
        player: PlayerActor,
        enemies: Vec<EnemyActor>,
        rng: R,
        progression: SkillProgression,
    ) -> Self {
        let enemy_order = (0..enemies.len()).collect();
        Self {
            config,
            player,
            enemies,
            enemy_order,
            initiative: Vec::new(),
            search: SearchBonus::default(),
            turn: 0,
            rng,
            progression,
        }
    }

    /// Rolls initiative for everyone present and describes the room.
    pub fn begin(&mut self) -> Vec<String> {
        let rolls = {
            let mut participants: Vec<&dyn Combatant> = Vec::with_capacity(self.enemies.len() + 1);
            participants.push(&self.player);
            participants.extend(self.enemies.iter().map(|enemy| enemy as &dyn Combatant));
            roll_initiative(&participants, &self.config, &mut self.rng)
        };

        // Participant 0 is the player.
        self.enemy_order = rolls
            .iter()
            .filter(|roll| roll.index > 0)
            .map(|roll| roll.index - 1)
            .collect();

        let order = rolls
            .iter()
            .map(|roll| format!("{} ({})", self.participant_name(roll.index), roll.score))
            .collect::<Vec<_>>()
            .join(", ");
        info!(
            target: "runtime",
            player = self.player.name(),
            enemies = self.enemies.len(),
            %order,
            "encounter started"
        );
        self.initiative = rolls;

        let mut lines = vec![format!("⚔️ Initiative: {order}")];
        lines.extend(self.look());
        lines
    }

    /// Attacks the visible enemy at `target` (position in the visible list,
    /// first by default), then every visible survivor hits back at half damage.
    pub fn attack(&mut self, target: Option<usize>) -> Result<Vec<String>> {
        if self.is_game_over() {
            return Ok(vec![PLAYER_DIED.to_string()]);
        }

        let visible = self.visible_enemies();
        if visible.is_empty() {
            let mut lines = vec![NOTHING_TO_FIGHT.to_string()];
            lines.extend(self.advance_turn());
            return Ok(lines);
        }

        let position = target.unwrap_or(0);
        let &index = visible.get(position).ok_or(RuntimeError::InvalidTarget {
            index: position,
            visible: visible.len(),
        })?;

        let tags = self.weapon_tags();
        let bonus = self.progression.skill_roll_bonus(&tags);
        let request = AttackRequest::new(self.player.skill() + bonus).with_buffs(self.player.buffs);
        debug!(
            target: "runtime",
            turn = self.turn,
            defender = self.enemies[index].name(),
            skill_bonus = bonus,
            "player attacks"
        );

        let resolver = CombatResolver::new(&self.config);
        let report = resolver.resolve_attack(
            &self.player,
            &mut self.enemies[index],
            request,
            &mut self.rng,
            &mut self.progression,
        );
        let mut lines = report.lines;
        lines.extend(self.progression.take_level_ups().iter().map(level_up_line));

        for &enemy in self.enemy_order.iter().filter(|i| visible.contains(*i)) {
            if !self.player.is_alive() {
                break;
            }
            let attacker = &self.enemies[enemy];
            if !attacker.is_alive() {
                continue;
            }
            let report = resolver.resolve_attack(
                attacker,
                &mut self.player,
                AttackRequest::new(0).half_damage(),
                &mut self.rng,
                &mut NoProgression,
            );
            lines.extend(report.lines);
        }

        lines.push(format!("💖 Your health: {}", self.player.health()));
        if !self.player.is_alive() {
            lines.push(PLAYER_SLAIN.to_string());
        }

        lines.extend(self.advance_turn());
        Ok(lines)
    }

    /// Raises perception for the next few turns. Does not pass time.
    pub fn search(&mut self) -> Vec<String> {
        if self.is_game_over() {
            return vec![PLAYER_DIED.to_string()];
        }

        let before = self.visible_enemies();
        self.search.activate(&self.config);

        let mut lines = vec![SEARCH_STARTED.to_string()];
        for index in self.visible_enemies() {
            if !before.contains(&index) {
                lines.push(format!("👁️ You spot {}!", self.enemies[index].name()));
            }
        }
        debug!(
            target: "runtime",
            perception = self.perception(),
            turns = self.search.turns_remaining(),
            "search started"
        );
        lines
    }

    /// Lets a turn pass.
    pub fn wait(&mut self) -> Vec<String> {
        if self.is_game_over() {
            return vec![PLAYER_DIED.to_string()];
        }
        let mut lines = vec![WAITED.to_string()];
        lines.extend(self.advance_turn());
        lines
    }

    /// Names the enemies the player can currently see.
    pub fn look(&self) -> Vec<String> {
        let visible = self.visible_enemies();
        if visible.is_empty() {
            return vec![ROOM_QUIET.to_string()];
        }
        let names: Vec<&str> = visible.iter().map(|&i| self.enemies[i].name()).collect();
        vec![format!("Enemies here: {}", names.join(", "))]
    }

    /// Player perception including any active search bonus.
    pub fn perception(&self) -> i32 {
        effective_perception(self.player.perception(), &self.search)
    }

    /// Indices of living enemies the player can detect.
    pub fn visible_enemies(&self) -> Vec<usize> {
        visible_targets(self.perception(), &self.enemies)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_game_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// True once every enemy, seen or unseen, is dead.
    pub fn is_cleared(&self) -> bool {
        self.enemies.iter().all(|enemy| !enemy.is_alive())
    }

    pub fn player(&self) -> &PlayerActor {
        &self.player
    }

    pub fn enemies(&self) -> &[EnemyActor] {
        &self.enemies
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn search_bonus(&self) -> &SearchBonus {
        &self.search
    }

    pub fn initiative(&self) -> &[InitiativeRoll] {
        &self.initiative
    }

    pub fn progression(&self) -> &SkillProgression {
        &self.progression
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn advance_turn(&mut self) -> Vec<String> {
        self.turn += 1;
        self.search.tick();

        let mut lines = Vec::new();

        // The dead do not tick, so a regen cannot bring the player back.
        if self.player.is_alive() {
            let events = engine::process(&mut self.player);
            lines.extend(effect_lines(&events, Party::of(&self.player)));
            if !self.player.is_alive() {
                lines.push(PLAYER_SLAIN.to_string());
            }
        }

        // Hidden enemies still tick, but quietly.
        let perception = self.perception();
        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
            let seen = is_detectable(perception, &*enemy);
            let events = engine::process(&mut *enemy);
            if seen {
                lines.extend(effect_lines(&events, Party::of(&*enemy)));
                if !enemy.is_alive() {
                    lines.push(format!("💀 {} is defeated!", enemy.name()));
                }
            }
        }

        if self.visible_enemies().is_empty() {
            lines.push(ROOM_QUIET.to_string());
        }

        debug!(
            target: "runtime",
            turn = self.turn,
            health = self.player.health(),
            search_turns = self.search.turns_remaining(),
            "turn advanced"
        );
        lines
    }

    fn weapon_tags(&self) -> Vec<&'static str> {
        self.player
            .weapon
            .as_ref()
            .map(|weapon| weapon.traits.iter().map(WeaponTrait::tag).collect())
            .unwrap_or_default()
    }

    fn participant_name(&self, index: usize) -> &str {
        match index.checked_sub(1) {
            None => "You",
            Some(enemy) => self.enemies.get(enemy).map_or("?", |enemy| enemy.name()),
        }
    }
}

fn level_up_line(level_up: &LevelUp) -> String {
    format!("📈 Your {} skill rises to {}!", level_up.tag, level_up.level)
}

/// Builder for a seeded [`Session`] from configuration and content.
pub struct SessionBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
    player: Option<PlayerActor>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            player: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an already loaded catalog instead of reading `content_dir`.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a prepared character as-is. The configured name and weapon are ignored.
    pub fn player(mut self, player: PlayerActor) -> Self {
        self.player = Some(player);
        self
    }

    /// Resolves content, equips the player and spawns the encounter.
    ///
    /// With a `content_dir`, its `rules.toml` replaces the configured rules.
    pub fn build(self) -> Result<Session<PcgRng>> {
        let mut game_config = self.config.game_config.clone();
        let catalog = match (self.catalog, &self.config.content_dir) {
            (Some(catalog), _) => catalog,
            (None, Some(dir)) => {
                let factory = ContentFactory::new(dir);
                game_config = factory.load_config()?;
                factory.load_catalog()?
            }
            (None, None) => Catalog::builtin()?,
        };

        let player = match self.player {
            Some(player) => player,
            None => {
                let player = PlayerActor::new(self.config.player_name.clone());
                match &self.config.weapon {
                    Some(id) => {
                        let weapon = catalog
                            .weapon(id)
                            .ok_or_else(|| RuntimeError::UnknownWeapon { id: id.clone() })?;
                        player.equipped(weapon.clone())
                    }
                    None => player,
                }
            }
        };

        let name = &self.config.encounter;
        let enemies = catalog
            .encounter(name)
            .ok_or_else(|| RuntimeError::UnknownEncounter { name: name.clone() })?;
        if enemies.is_empty() {
            return Err(RuntimeError::EmptyEncounter { name: name.clone() });
        }

        let seed = self.config.resolve_seed();
        info!(
            target: "runtime",
            seed,
            encounter = %name,
            player = player.name(),
            enemies = enemies.len(),
            "session created"
        );

        Ok(Session::new(
            game_config,
            player,
            enemies,
            PcgRng::seeded(seed),
            SkillProgression::seeded(seed.rotate_left(32)),
        ))
    }
}
