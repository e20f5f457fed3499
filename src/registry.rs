//! Built-in handler discovery and the process-wide handler registry.
//!
//! Built-in handlers apply to every script of a given language, independent
//! of per-dataset configuration. They are discovered once per process
//! lifetime from a pluggable [`BuiltinDiscovery`] source and published
//! through an explicit [`HandlerRegistry::install`] call; afterwards the
//! registry is read-only. It is queried at table construction time only,
//! never per cell.

use std::collections::HashMap ;
use std::convert::Infallible ;
use std::sync::OnceLock ;

use tracing::warn ;

use crate::{ HandlerFactory, ScriptHandler };



static GLOBAL: OnceLock<HandlerRegistry> = OnceLock::new();

/// Process-wide mapping from language name to the ordered built-in handler
/// factories discovered for that language.
///
/// Failure-tolerant: a broken discovery source disables only the built-ins,
/// never the host process. Dispatch keeps working with custom handlers only.
pub struct HandlerRegistry {
	by_language: HashMap<String, Vec<HandlerFactory>>,
}

impl HandlerRegistry {

	fn empty() -> Self {
		Self { by_language: HashMap::with_capacity( 0 ) }
	}

	/// Builds a registry from a discovery source.
	///
	/// Factories are grouped by the language their handlers self-describe,
	/// preserving discovery order within each language. A discovery failure
	/// is caught and logged as a warning, and the registry degrades to empty:
	/// no built-ins exist for any language.
	pub fn discover<D: BuiltinDiscovery>( discovery: D ) -> Self {
		let factories = match discovery.discover() {
			Ok( factories ) => factories,
			Err( error ) => {
				warn!( "Loading of built-in script invocation handlers failed, continuing without built-ins: {}", error );
				return Self::empty();
			}
		};

		let mut by_language: HashMap<String, Vec<HandlerFactory>> = HashMap::new();
		for factory in factories {
			let language = factory().language().to_string();
			by_language.entry( language ).or_default().push( factory );
		}
		Self { by_language }
	}

	/// Publishes this registry as the process-wide singleton.
	///
	/// Must happen before the first dispatch table is constructed; tables
	/// query the registry when they resolve their bindings. Returns `false`
	/// and leaves the installed registry untouched if one was already
	/// installed - re-installation is a logged no-op.
	pub fn install( self ) -> bool {
		let installed = GLOBAL.set( self ).is_ok();
		if !installed {
			warn!( "Handler registry already installed, ignoring re-installation." );
		}
		installed
	}

	/// Returns the process-wide registry.
	///
	/// Empty until [`HandlerRegistry::install`] has published one.
	pub fn global() -> &'static Self {
		GLOBAL.get_or_init( Self::empty )
	}

	/// Instantiates the built-in handlers registered for a language, in
	/// discovery order. Possibly empty, never fails.
	pub fn handlers_for( &self, language: &str ) -> Vec<Box<dyn ScriptHandler>> {
		self.by_language
			.get( language )
			.map_or_else( Vec::new, | factories | factories.iter().map(| factory | factory() ).collect() )
	}

}

impl std::fmt::Debug for HandlerRegistry {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_map()
			.entries( self.by_language.iter().map(|( language, factories )| ( language, factories.len() )))
			.finish()
	}
}

/// Source of the built-in handler factories for a deployment.
///
/// Implement this to define where built-ins come from: a static registration
/// table ([`StaticDiscovery`]), a configuration file, or a dependency-injected
/// list. Each produced handler self-describes its target language through
/// [`ScriptHandler::language`].
pub trait BuiltinDiscovery {

	/// Error type for discovery failures.
	type Error: std::error::Error ;

	/// Returns the factories for every built-in handler in the deployment.
	///
	/// # Errors
	/// Implementations may fail structurally, e.g. when a handler list cannot
	/// be read. The registry treats any failure as "no built-ins anywhere".
	fn discover( self ) -> Result<Vec<HandlerFactory>, Self::Error> ;

}

/// Static registration table: built-ins declared explicitly in code.
#[derive( Default )]
pub struct StaticDiscovery {
	factories: Vec<HandlerFactory>,
}

impl StaticDiscovery {

	/// Creates an empty table.
	pub fn new() -> Self { Self::default() }

	/// Adds a built-in handler factory to the table.
	pub fn with<H, F>( mut self, factory: F ) -> Self
	where
		H: ScriptHandler + 'static,
		F: Fn() -> H + Send + Sync + 'static,
	{
		self.factories.push( Box::new( move || Box::new( factory() )));
		self
	}

}

impl BuiltinDiscovery for StaticDiscovery {
	type Error = Infallible ;

	fn discover( self ) -> Result<Vec<HandlerFactory>, Infallible> {
		Ok( self.factories )
	}
}

impl std::fmt::Debug for StaticDiscovery {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "StaticDiscovery" )
			.field( "factories", &self.factories.len() )
			.finish()
	}
}
