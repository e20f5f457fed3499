//! Dataset-level adaptation: wrap every table a dataset yields.

use itertools::Itertools ;
use thiserror::Error ;
use tracing::info ;

use crate::{ ConfigError, ScriptConfig, ScriptHost, ScriptTable, Table };



/// Read-only contract of a dataset: an ordered collection of tables that can
/// be iterated forward and in reverse.
///
/// Implemented by the fixture source being wrapped; [`ScriptDataSet`]
/// reproduces it exactly.
pub trait DataSet {

	/// Error type for iteration failures.
	type Error: std::error::Error + 'static ;
	/// Table type yielded by iteration.
	type Table<'a>: Table where Self: 'a ;
	/// Forward iterator over the dataset's tables.
	type Iter<'a>: Iterator<Item = Result<Self::Table<'a>, Self::Error>> where Self: 'a ;
	/// Reverse iterator over the dataset's tables.
	type ReverseIter<'a>: Iterator<Item = Result<Self::Table<'a>, Self::Error>> where Self: 'a ;

	/// Iterates the tables in dataset order.
	fn iter( &self ) -> Self::Iter<'_> ;

	/// Iterates the tables in reverse dataset order.
	fn reverse_iter( &self ) -> Self::ReverseIter<'_> ;

}

/// A dataset wrapper yielding a fresh [`ScriptTable`] for every table of the
/// wrapped dataset, all sharing one configuration list.
///
/// Pure composition: no evaluation logic lives here. Both iteration
/// directions delegate to the wrapped dataset's corresponding iterator and
/// wrap each yielded table identically.
pub struct ScriptDataSet<D, H> {
	wrapped: D,
	host: H,
	/// At least one configuration, in registration order
	configs: Vec<ScriptConfig>,
}

impl<D: DataSet, H: ScriptHost> ScriptDataSet<D, H> {

	/// Wraps a dataset with at least one configuration.
	///
	/// # Errors
	/// Fails fast with [`ConfigError::NoConfigurations`] if `configs` is
	/// empty. Engine availability is checked per table, at the moment the
	/// table is wrapped during iteration.
	pub fn new(
		wrapped: D,
		host: H,
		configs: impl IntoIterator<Item = ScriptConfig>,
	) -> Result<Self, ConfigError> {
		let configs: Vec<ScriptConfig> = configs.into_iter().collect();
		if configs.is_empty() { return Err( ConfigError::NoConfigurations ) }

		info!( "Scriptable dataset configured with prefixes: {}.", configs.iter().map( ScriptConfig::prefix ).join( ", " ));
		Ok( Self { wrapped, host, configs })
	}

}

impl<D: DataSet, H: ScriptHost> DataSet for ScriptDataSet<D, H> {

	type Error = DataSetError<D::Error> ;
	type Table<'a> = ScriptTable<D::Table<'a>> where Self: 'a ;
	type Iter<'a> = ScriptTables<'a, D::Iter<'a>, H> where Self: 'a ;
	type ReverseIter<'a> = ScriptTables<'a, D::ReverseIter<'a>, H> where Self: 'a ;

	fn iter( &self ) -> Self::Iter<'_> {
		ScriptTables { inner: self.wrapped.iter(), configs: &self.configs, host: &self.host }
	}

	fn reverse_iter( &self ) -> Self::ReverseIter<'_> {
		ScriptTables { inner: self.wrapped.reverse_iter(), configs: &self.configs, host: &self.host }
	}

}

impl<D, H> std::fmt::Debug for ScriptDataSet<D, H> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ScriptDataSet" )
			.field( "configs", &self.configs )
			.finish_non_exhaustive()
	}
}

/// Iterator wrapping every table yielded by an underlying dataset iterator.
pub struct ScriptTables<'a, I, H> {
	inner: I,
	configs: &'a [ScriptConfig],
	host: &'a H,
}

impl<'a, T, E, I, H> Iterator for ScriptTables<'a, I, H>
where
	T: Table,
	E: std::error::Error + 'static,
	I: Iterator<Item = Result<T, E>>,
	H: ScriptHost,
{
	type Item = Result<ScriptTable<T>, DataSetError<E>> ;

	fn next( &mut self ) -> Option<Self::Item> {
		self.inner.next().map(| table | match table {
			Ok( table ) => ScriptTable::new( table, self.configs, self.host )
				.map_err( DataSetError::Config ),
			Err( source ) => Err( DataSetError::Source( source )),
		})
	}
}

/// Errors that can occur when iterating a dispatch-wrapped dataset.
#[derive( Error, Debug )]
pub enum DataSetError<E: std::error::Error + 'static> {
	/// The wrapped dataset's own iteration failed.
	#[error( transparent )] Source( E ),
	/// A yielded table could not be wrapped, e.g. because a configured
	/// language has no engine.
	#[error( transparent )] Config( #[from] ConfigError ),
}
