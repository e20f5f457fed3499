//! Resolved per-configuration language bindings.

use tracing::{ debug, info };

use crate::{ ConfigError, EngineError, EngineHandle, HandlerRegistry, ScriptConfig, ScriptHandler, ScriptHost, Value };



/// A configuration resolved against a concrete engine: the prefix, the
/// engine handle, and the merged ordered handler list.
///
/// Built once per configuration when a dispatch table is constructed; never
/// mutated afterward; owned exclusively by the table that created it.
pub(crate) struct LanguageBinding {
	prefix: String,
	engine: EngineHandle,
	/// Built-ins for the language (registry order) followed by the
	/// configuration's custom handlers (configuration order)
	handlers: Vec<Box<dyn ScriptHandler>>,
}

impl LanguageBinding {

	/// Resolves a configuration into a binding.
	///
	/// Instantiates the built-in handlers for the configured language, merges
	/// the configuration's custom handlers behind them, and binds the engine
	/// handle into every handler.
	///
	/// # Errors
	/// Fails if the host has no engine for the configured language.
	pub(crate) fn resolve( config: &ScriptConfig, host: &dyn ScriptHost ) -> Result<Self, ConfigError> {
		let engine = host.engine( config.language() ).ok_or_else(|| ConfigError::NoEngine {
			language: config.language().to_string(),
		})?;

		let mut handlers = HandlerRegistry::global().handlers_for( config.language() );
		handlers.extend( config.handlers().iter().map(| factory | factory() ));
		for handler in &mut handlers {
			handler.bind_engine( engine.clone() );
		}

		info!( "Registered scripting engine for language {} with prefix {}.", config.language(), config.prefix() );
		Ok( Self { prefix: config.prefix().to_string(), engine, handlers })
	}

	/// The literal marker this binding reacts to.
	#[inline] pub(crate) fn prefix( &self ) -> &str { &self.prefix }

	/// Runs the full pipeline for one script body: the pre-invoke chain in
	/// list order, the engine evaluation, the post-invoke chain in reverse
	/// order (the handler whose pre-invoke ran last post-processes first).
	///
	/// The engine lock is held for the evaluation only and released before
	/// the post chain, so handlers may call back into the engine.
	pub(crate) fn run( &self, body: &str ) -> Result<Value, EngineError> {
		let script = self.handlers.iter()
			.fold( body.to_string(), | script, handler | handler.pre_invoke( script ));

		debug!( "Executing script: {}", script );
		let result = self.engine.evaluate( &script )?;

		self.handlers.iter().rev()
			.try_fold( result, | value, handler | handler.post_invoke( value ))
			.map_err( EngineError::RuntimeException )
	}

}

impl std::fmt::Debug for LanguageBinding {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "LanguageBinding" )
			.field( "prefix", &self.prefix )
			.field( "engine", &self.engine )
			.field( "handlers", &self.handlers.len() )
			.finish_non_exhaustive()
	}
}
